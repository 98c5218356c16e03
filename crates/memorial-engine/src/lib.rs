//! Compliance analysis engine for fire-safety descriptive memorials.
//!
//! Pure function from (document text, instruction corpus) to a verification
//! report: deterministic threshold rules plus a weighted bag-of-words
//! semantic pass, aggregated into a final conformity percentage. No I/O, no
//! persistence; ingestion and presentation live with the callers.

pub mod aggregate;
pub mod context;
pub mod corpus;
pub mod error;
pub mod extractors;
pub mod patterns;
pub mod rules;
pub mod semantic;
pub mod summary;

use std::collections::HashSet;

use memorial_types::{AnalysisResult, ExtractedDocument, VerificationItem};
use tracing::debug;

pub use aggregate::get_stats;
pub use corpus::{default_corpus, InstructionCorpusEntry};
pub use error::AnalysisError;
pub use semantic::{SemanticMatcher, TermDictionary};

/// Engine configuration. Corpus, vocabulary and rule registries are
/// injected rather than read from module state, so tests can substitute
/// smaller ones.
pub struct EngineConfig {
    pub corpus: Vec<InstructionCorpusEntry>,
    pub dictionary: TermDictionary,
    pub rules: Vec<rules::ComplianceRule>,
    pub legacy_rules: Vec<rules::ComplianceRule>,
    /// Corpus prefix length covered by the legacy semantic pass.
    pub legacy_semantic_len: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            corpus: default_corpus(),
            dictionary: TermDictionary::builtin(),
            rules: rules::registry(),
            legacy_rules: rules::legacy::legacy_rules(),
            legacy_semantic_len: 3,
        }
    }
}

/// Analysis engine entry point.
pub struct AnalysisEngine {
    config: EngineConfig,
}

impl AnalysisEngine {
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Run the full pipeline over an extracted document.
    ///
    /// Fails only when the upstream extraction produced no text. Failures
    /// inside individual rules or semantic comparisons are isolated and
    /// surface as degraded NAO_CONFORME items.
    pub fn analyze(&self, document: &ExtractedDocument) -> Result<AnalysisResult, AnalysisError> {
        if document.text.trim().is_empty() {
            return Err(AnalysisError::EmptyDocument);
        }

        let text = &document.text;

        // 1. deterministic rules over the full registry
        let mut items = rules::evaluate_all(text, &self.config.rules);
        debug!(count = items.len(), "regras determinísticas avaliadas");

        // 2. legacy rules, skipping checks that overlap step 1
        let legacy: Vec<_> = self
            .config
            .legacy_rules
            .iter()
            .filter(|rule| !overlaps_existing(rule, &items))
            .cloned()
            .collect();
        items.extend(rules::evaluate_all(text, &legacy));

        // 3. semantic pass over the whole corpus
        let matcher = SemanticMatcher::new(&self.config.dictionary);
        let semantic_items = matcher.analyze(document, &self.config.corpus);
        debug!(count = semantic_items.len(), "correspondências semânticas");

        // 4. legacy semantic pass over a corpus prefix, deduplicated by
        // instruction reference against step 3
        let semantic_refs: HashSet<&str> = semantic_items
            .iter()
            .map(|i| i.instruction_ref.as_str())
            .collect();
        let prefix_len = self.config.legacy_semantic_len.min(self.config.corpus.len());
        let legacy_semantic: Vec<_> = matcher
            .analyze_legacy(document, &self.config.corpus[..prefix_len])
            .into_iter()
            .filter(|i| !semantic_refs.contains(i.instruction_ref.as_str()))
            .collect();

        // 5. merge
        items.extend(semantic_items);
        items.extend(legacy_semantic);

        // 6. aggregate
        let stats = aggregate::get_stats(&items);

        // 7. human-readable summary
        let document_context = context::detect_document_context(document);
        let summary = summary::build_summary(document, &document_context, &stats);

        Ok(AnalysisResult {
            conformity_percent: stats.conformity_percent,
            items,
            summary,
            document_context,
        })
    }

    /// Run only the deterministic rules over raw text (test seam).
    pub fn check_text(&self, text: &str) -> Vec<VerificationItem> {
        rules::evaluate_all(text, &self.config.rules)
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// A legacy check overlaps when its id was already emitted or its
/// description repeats an emitted item label.
fn overlaps_existing(rule: &rules::ComplianceRule, items: &[VerificationItem]) -> bool {
    let description = rule.description.to_lowercase();
    items.iter().any(|item| {
        let label = item.item.to_lowercase();
        item.id == rule.id || label.contains(&description) || description.contains(&label)
    })
}
