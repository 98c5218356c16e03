use thiserror::Error;

/// Engine error taxonomy.
///
/// `EmptyDocument` is fatal and aborts the whole analysis. `Rule` is always
/// recovered by the evaluator: it is converted into a NAO_CONFORME item and
/// never reaches the caller of [`crate::AnalysisEngine::analyze`].
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The upstream extraction collaborator produced no usable text.
    #[error("documento sem texto extraído; análise abortada")]
    EmptyDocument,

    /// An individual rule or semantic comparison failed.
    #[error("falha na verificação {rule_id} ({instruction_code}): {message}")]
    Rule {
        rule_id: String,
        instruction_code: String,
        message: String,
    },
}

impl AnalysisError {
    /// Build a rule failure for the given identifiers.
    pub fn rule(
        rule_id: impl Into<String>,
        instruction_code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        AnalysisError::Rule {
            rule_id: rule_id.into(),
            instruction_code: instruction_code.into(),
            message: message.into(),
        }
    }
}
