//! Per-instruction semantic relevance decisions and item synthesis.

use std::cmp::Ordering;

use memorial_types::{ExtractedDocument, Severity, VerificationItem, VerificationResult};
use tracing::debug;

use crate::corpus::InstructionCorpusEntry;
use crate::semantic::terms::{suggestion_for_category, TermDictionary};
use crate::semantic::vector::SemanticVector;

/// Minimum similarity below which a match is rejected, unless enough terms
/// overlap.
const MIN_SIMILARITY: f64 = 0.15;
const MIN_MATCHED_TERMS: usize = 2;
/// Section relevance cut-off for listing section titles in observations.
const SECTION_RELEVANCE_THRESHOLD: f64 = 0.2;
/// Matched terms shown in the observation text.
const OBSERVATION_TERM_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchConfidence {
    High,
    Medium,
    Low,
}

/// A synthesized item plus its first-class similarity, used for ordering
/// without re-parsing the observation text.
struct SemanticFinding {
    similarity: f64,
    item: VerificationItem,
}

pub struct SemanticMatcher<'a> {
    dictionary: &'a TermDictionary,
}

impl<'a> SemanticMatcher<'a> {
    pub fn new(dictionary: &'a TermDictionary) -> Self {
        Self { dictionary }
    }

    /// Compare the document against every corpus instruction and synthesize
    /// one item per accepted match, ordered by descending similarity.
    pub fn analyze(
        &self,
        document: &ExtractedDocument,
        corpus: &[InstructionCorpusEntry],
    ) -> Vec<VerificationItem> {
        let doc_vector = SemanticVector::build(&document.text, self.dictionary);
        let section_vectors: Vec<(String, SemanticVector)> = document
            .sections
            .iter()
            .map(|s| {
                (
                    s.title.clone(),
                    SemanticVector::build(&s.content, self.dictionary),
                )
            })
            .collect();

        let mut findings: Vec<SemanticFinding> = corpus
            .iter()
            .filter_map(|entry| self.match_instruction(&doc_vector, &section_vectors, entry))
            .collect();

        findings.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(Ordering::Equal)
        });

        findings.into_iter().map(|f| f.item).collect()
    }

    fn match_instruction(
        &self,
        doc_vector: &SemanticVector,
        section_vectors: &[(String, SemanticVector)],
        entry: &InstructionCorpusEntry,
    ) -> Option<SemanticFinding> {
        let instruction_text = format!("{} {}", entry.title, entry.full_content);
        let instruction_vector = SemanticVector::build(&instruction_text, self.dictionary);

        let similarity = doc_vector.cosine(&instruction_vector);
        let matched = doc_vector.matched_terms(&instruction_vector);

        if similarity < MIN_SIMILARITY && matched.len() < MIN_MATCHED_TERMS {
            debug!(
                instruction = %entry.number,
                similarity,
                matched = matched.len(),
                "instrução descartada pela análise semântica"
            );
            return None;
        }

        let confidence = classify_confidence(similarity, matched.len());
        let result = synthesize_result(confidence, similarity);

        let relevant_sections: Vec<&str> = section_vectors
            .iter()
            .filter(|(_, v)| v.cosine(&instruction_vector) > SECTION_RELEVANCE_THRESHOLD)
            .map(|(title, _)| title.as_str())
            .collect();

        let severity = match result {
            VerificationResult::Conforme => Severity::Low,
            VerificationResult::Parcial => Severity::Medium,
            _ => Severity::Medium,
        };

        let similarity_percent = (similarity * 100.0).round() as u32;
        let mut observation = format!(
            "Similaridade de {}% com a {} — {}.",
            similarity_percent, entry.number, entry.title
        );
        if !matched.is_empty() {
            let shown: Vec<&str> = matched
                .iter()
                .take(OBSERVATION_TERM_LIMIT)
                .map(String::as_str)
                .collect();
            observation.push_str(&format!(" Termos em comum: {}.", shown.join(", ")));
        }
        if !relevant_sections.is_empty() {
            observation.push_str(&format!(
                " Seções relevantes: {}.",
                relevant_sections.join(", ")
            ));
        }

        debug!(
            instruction = %entry.number,
            similarity,
            ?confidence,
            "correspondência semântica aceita"
        );

        let item = VerificationItem::new(
            format!("semantic-{}", entry.id),
            format!("Aderência à {} — {}", entry.number, entry.title),
            result,
            observation,
            entry.number.clone(),
            severity,
        )
        .with_context(matched)
        .with_suggestion(suggestion_for_category(&entry.category));

        Some(SemanticFinding { similarity, item })
    }

    /// Simplified comparison kept for backward compatibility. The caller
    /// passes a short corpus prefix and deduplicates against the main pass.
    pub fn analyze_legacy(
        &self,
        document: &ExtractedDocument,
        corpus: &[InstructionCorpusEntry],
    ) -> Vec<VerificationItem> {
        let doc_vector = SemanticVector::build(&document.text, self.dictionary);

        corpus
            .iter()
            .map(|entry| {
                let instruction_text = format!("{} {}", entry.title, entry.full_content);
                let instruction_vector = SemanticVector::build(&instruction_text, self.dictionary);
                let similarity = doc_vector.cosine(&instruction_vector);

                let result = if similarity > 0.6 {
                    VerificationResult::Conforme
                } else if similarity > 0.3 {
                    VerificationResult::Parcial
                } else {
                    VerificationResult::NaoConforme
                };

                VerificationItem::new(
                    format!("legacy-semantic-{}", entry.id),
                    format!("Correspondência com a {}", entry.number),
                    result,
                    format!(
                        "Correspondência de {}% com a {} ({}) pela análise simplificada.",
                        (similarity * 100.0).round() as u32,
                        entry.number,
                        entry.title
                    ),
                    entry.number.clone(),
                    Severity::Low,
                )
            })
            .collect()
    }
}

fn classify_confidence(similarity: f64, matched_terms: usize) -> MatchConfidence {
    if similarity > 0.7 && matched_terms > 5 {
        MatchConfidence::High
    } else if similarity > 0.5 && matched_terms > 3 {
        MatchConfidence::Medium
    } else {
        MatchConfidence::Low
    }
}

/// Cascading synthesis. A HIGH-confidence match with similarity <= 0.6
/// falls through to NAO_CONFORME instead of PARCIAL; this asymmetry is
/// preserved from the original decision table and is pending product
/// clarification (see DESIGN.md).
fn synthesize_result(confidence: MatchConfidence, similarity: f64) -> VerificationResult {
    if confidence == MatchConfidence::High && similarity > 0.6 {
        VerificationResult::Conforme
    } else if confidence == MatchConfidence::Medium && similarity > 0.4 {
        VerificationResult::Parcial
    } else {
        VerificationResult::NaoConforme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::default_corpus;
    use memorial_types::{DocumentMetadata, DocumentSection};

    fn document(text: &str) -> ExtractedDocument {
        ExtractedDocument::from_text(text)
    }

    #[test]
    fn test_confidence_tiers() {
        assert_eq!(classify_confidence(0.8, 6), MatchConfidence::High);
        assert_eq!(classify_confidence(0.8, 5), MatchConfidence::Medium);
        assert_eq!(classify_confidence(0.55, 4), MatchConfidence::Medium);
        assert_eq!(classify_confidence(0.55, 3), MatchConfidence::Low);
        assert_eq!(classify_confidence(0.1, 10), MatchConfidence::Low);
    }

    #[test]
    fn test_synthesis_cascade_asymmetry() {
        // HIGH confidence with similarity at or below 0.6 does NOT soften
        // to PARCIAL; it falls to NAO_CONFORME.
        assert_eq!(
            synthesize_result(MatchConfidence::High, 0.55),
            VerificationResult::NaoConforme
        );
        assert_eq!(
            synthesize_result(MatchConfidence::High, 0.75),
            VerificationResult::Conforme
        );
        assert_eq!(
            synthesize_result(MatchConfidence::Medium, 0.55),
            VerificationResult::Parcial
        );
        assert_eq!(
            synthesize_result(MatchConfidence::Low, 0.9),
            VerificationResult::NaoConforme
        );
    }

    #[test]
    fn test_irrelevant_document_produces_no_items() {
        let dictionary = TermDictionary::builtin();
        let matcher = SemanticMatcher::new(&dictionary);
        let doc = document("Contrato de locação residencial entre locador e locatário.");
        let items = matcher.analyze(&doc, &default_corpus());
        assert!(items.is_empty());
    }

    #[test]
    fn test_relevant_document_matches_and_sorts_by_similarity() {
        let dictionary = TermDictionary::builtin();
        let matcher = SemanticMatcher::new(&dictionary);
        let doc = document(
            "O sistema de hidrantes contará com reserva técnica de incêndio, bomba, \
             esguichos, mangueiras e registro de recalque, com pressão e vazão mínimas \
             garantidas pela tubulação da rede.",
        );
        let items = matcher.analyze(&doc, &default_corpus());

        assert!(!items.is_empty());
        assert_eq!(items[0].instruction_ref, "IT-22");
        assert!(items[0].observation.contains("Similaridade de"));
        assert!(items[0].context.as_ref().is_some_and(|c| !c.is_empty()));
    }

    #[test]
    fn test_relevant_sections_are_listed() {
        let dictionary = TermDictionary::builtin();
        let matcher = SemanticMatcher::new(&dictionary);
        let doc = ExtractedDocument {
            text: "Iluminação de emergência com blocos autônomos, autonomia de duas horas, \
                   balizamento e aclaramento das rotas de fuga."
                .to_string(),
            sections: vec![
                DocumentSection {
                    title: "Iluminação de Emergência".to_string(),
                    content: "Blocos autônomos com bateria, autonomia mínima de duas horas, \
                              balizamento e aclaramento das rotas."
                        .to_string(),
                },
                DocumentSection {
                    title: "Paisagismo".to_string(),
                    content: "Jardins e canteiros externos.".to_string(),
                },
            ],
            metadata: DocumentMetadata {
                pages: 2,
                title: None,
            },
        };

        let items = matcher.analyze(&doc, &default_corpus());
        let lighting = items
            .iter()
            .find(|i| i.instruction_ref == "IT-18")
            .expect("IT-18 should match");
        assert!(lighting.observation.contains("Iluminação de Emergência"));
        assert!(!lighting.observation.contains("Paisagismo"));
    }

    #[test]
    fn test_legacy_pass_produces_one_item_per_entry() {
        let dictionary = TermDictionary::builtin();
        let matcher = SemanticMatcher::new(&dictionary);
        let corpus = default_corpus();
        let doc = document("Sistema de hidrantes com reserva de incêndio e bombas.");
        let items = matcher.analyze_legacy(&doc, &corpus[..3]);
        assert_eq!(items.len(), 3);
        assert!(items.iter().all(|i| i.id.starts_with("legacy-semantic-")));
    }
}
