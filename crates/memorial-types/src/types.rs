use serde::{Deserialize, Serialize};

/// Outcome of a single verification against a technical instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationResult {
    Conforme,
    NaoConforme,
    Parcial,
    NaoAplicavel,
}

impl VerificationResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationResult::Conforme => "CONFORME",
            VerificationResult::NaoConforme => "NAO_CONFORME",
            VerificationResult::Parcial => "PARCIAL",
            VerificationResult::NaoAplicavel => "NAO_APLICAVEL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        }
    }
}

/// One verification finding. `observation` is never empty: every item
/// carries a human-readable rationale, including degraded items produced
/// from recovered rule failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationItem {
    pub id: String,
    /// Human label of the verified item.
    pub item: String,
    pub result: VerificationResult,
    pub observation: String,
    /// Technical instruction or article this verification refers to.
    pub instruction_ref: String,
    pub severity: Severity,
    /// Blank until the caller associates the item with a stored analysis.
    pub analysis_id: String,
    /// Unix timestamp (seconds).
    pub created_at: i64,
    /// Matched terms, when the item came from the semantic matcher.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl VerificationItem {
    pub fn new(
        id: impl Into<String>,
        item: impl Into<String>,
        result: VerificationResult,
        observation: impl Into<String>,
        instruction_ref: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            id: id.into(),
            item: item.into(),
            result,
            observation: observation.into(),
            instruction_ref: instruction_ref.into(),
            severity,
            analysis_id: String::new(),
            created_at: chrono::Utc::now().timestamp(),
            context: None,
            suggestion: None,
        }
    }

    pub fn with_context(mut self, terms: Vec<String>) -> Self {
        self.context = Some(terms);
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Document type detected from title and body cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    MemorialDescritivo,
    ProjetoTecnico,
    Laudo,
    Desconhecido,
}

impl DocumentType {
    pub fn name(&self) -> &'static str {
        match self {
            DocumentType::MemorialDescritivo => "Memorial Descritivo",
            DocumentType::ProjetoTecnico => "Projeto Técnico",
            DocumentType::Laudo => "Laudo Técnico",
            DocumentType::Desconhecido => "Documento não identificado",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentContext {
    pub document_type: DocumentType,
    /// Fraction of expected memorial elements found, 0–100.
    pub completeness_percent: u8,
    pub missing_elements: Vec<String>,
    /// Overall document quality estimate, 0–100.
    pub quality_score: u8,
}

/// Final product of one analysis run. Constructed once, never mutated,
/// never persisted by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub conformity_percent: u8,
    pub items: Vec<VerificationItem>,
    pub summary: String,
    pub document_context: DocumentContext,
}

/// Aggregate counts over a list of verification items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationStats {
    pub total: usize,
    pub conforme: usize,
    pub nao_conforme: usize,
    pub parcial: usize,
    pub nao_aplicavel: usize,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    /// Items that count toward the percentage (total minus NAO_APLICAVEL).
    pub applicable: usize,
    pub conformity_percent: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_serializes_to_legacy_wire_names() {
        let json = serde_json::to_string(&VerificationResult::NaoConforme).unwrap();
        assert_eq!(json, "\"NAO_CONFORME\"");
        let json = serde_json::to_string(&VerificationResult::NaoAplicavel).unwrap();
        assert_eq!(json, "\"NAO_APLICAVEL\"");
    }

    #[test]
    fn test_severity_serializes_uppercase() {
        let json = serde_json::to_string(&Severity::Critical).unwrap();
        assert_eq!(json, "\"CRITICAL\"");
    }

    #[test]
    fn test_item_optional_fields_are_omitted() {
        let item = VerificationItem::new(
            "teste",
            "Item de teste",
            VerificationResult::Conforme,
            "ok",
            "IT-01",
            Severity::Low,
        );
        let json = serde_json::to_string(&item).unwrap();
        assert!(!json.contains("context"));
        assert!(!json.contains("suggestion"));
        assert!(json.contains("\"analysisId\":\"\""));
        assert!(json.contains("\"instructionRef\":\"IT-01\""));
    }

    #[test]
    fn test_item_builder_methods() {
        let item = VerificationItem::new(
            "teste",
            "Item",
            VerificationResult::Parcial,
            "obs",
            "IT-11",
            Severity::Medium,
        )
        .with_context(vec!["saida".to_string()])
        .with_suggestion("Detalhar as saídas de emergência");

        assert_eq!(item.context.as_deref(), Some(&["saida".to_string()][..]));
        assert!(item.suggestion.unwrap().contains("saídas"));
    }
}
