//! Document-context detection: type, completeness and quality.

use memorial_types::{DocumentContext, DocumentType, ExtractedDocument};

use crate::extractors::facts::{
    extract_building_height, extract_extinguishers, extract_floor_area, extract_hydrants,
    extract_occupancy_code, extract_responsible_engineer,
};
use crate::patterns::{
    contains_any, EMERGENCY_LIGHTING_PATTERN, EXIT_KEYWORDS, MEMORIAL_TYPE_PATTERN,
    PROJECT_TYPE_PATTERN, REPORT_TYPE_PATTERN,
};

/// Elements a complete memorial is expected to declare.
const EXPECTED_ELEMENTS: usize = 8;

pub fn detect_document_context(document: &ExtractedDocument) -> DocumentContext {
    let document_type = detect_type(document);

    let text = &document.text;
    let text_lower = text.to_lowercase();

    let mut missing_elements = Vec::new();
    if extract_floor_area(text).is_none() {
        missing_elements.push("área construída".to_string());
    }
    if extract_building_height(text).is_none() {
        missing_elements.push("altura da edificação".to_string());
    }
    if extract_occupancy_code(text).is_none() {
        missing_elements.push("classificação da ocupação".to_string());
    }
    if extract_responsible_engineer(text).is_none() {
        missing_elements.push("responsável técnico".to_string());
    }
    if !contains_any(&text_lower, EXIT_KEYWORDS) {
        missing_elements.push("saídas de emergência".to_string());
    }
    if extract_extinguishers(text).is_empty() {
        missing_elements.push("extintores".to_string());
    }
    if !EMERGENCY_LIGHTING_PATTERN.is_match(text) {
        missing_elements.push("iluminação de emergência".to_string());
    }
    if extract_hydrants(text).is_empty() {
        missing_elements.push("hidrantes".to_string());
    }

    let present = EXPECTED_ELEMENTS - missing_elements.len();
    let completeness_percent =
        ((present as f64 / EXPECTED_ELEMENTS as f64) * 100.0).round() as u8;

    let quality_score = quality_score(document, completeness_percent);

    DocumentContext {
        document_type,
        completeness_percent,
        missing_elements,
        quality_score,
    }
}

/// Title cues win over body cues; the memorial cue wins over the generic
/// "laudo" cue, which also appears in boilerplate.
fn detect_type(document: &ExtractedDocument) -> DocumentType {
    let title = document.metadata.title.as_deref().unwrap_or("");

    for candidate in [title, document.text.as_str()] {
        if MEMORIAL_TYPE_PATTERN.is_match(candidate) {
            return DocumentType::MemorialDescritivo;
        }
        if PROJECT_TYPE_PATTERN.is_match(candidate) {
            return DocumentType::ProjetoTecnico;
        }
        if REPORT_TYPE_PATTERN.is_match(candidate) {
            return DocumentType::Laudo;
        }
    }

    DocumentType::Desconhecido
}

/// Blend of completeness (60%), section structure (up to 20 points) and
/// text volume (up to 20 points), clamped to 0-100.
fn quality_score(document: &ExtractedDocument, completeness_percent: u8) -> u8 {
    let completeness_points = f64::from(completeness_percent) * 0.6;
    let section_points = (document.sections.len() as f64 * 5.0).min(20.0);
    let word_count = document.text.split_whitespace().count();
    let volume_points = (word_count as f64 / 100.0).min(20.0);

    (completeness_points + section_points + volume_points).round().min(100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use memorial_types::{DocumentMetadata, DocumentSection};

    #[test]
    fn test_detects_memorial_from_title() {
        let doc = ExtractedDocument {
            text: "Conteúdo genérico.".to_string(),
            sections: vec![],
            metadata: DocumentMetadata {
                pages: 1,
                title: Some("Memorial Descritivo de Segurança".to_string()),
            },
        };
        let context = detect_document_context(&doc);
        assert_eq!(context.document_type, DocumentType::MemorialDescritivo);
    }

    #[test]
    fn test_detects_type_from_body_as_fallback() {
        let doc = ExtractedDocument::from_text(
            "O presente projeto de segurança contra incêndio abrange toda a edificação.",
        );
        let context = detect_document_context(&doc);
        assert_eq!(context.document_type, DocumentType::ProjetoTecnico);
    }

    #[test]
    fn test_complete_memorial_has_full_completeness() {
        let text = "Memorial descritivo. Responsável Técnico: João Silva, CREA 12345. \
                    Área construída: 600 m². Altura da edificação: 12 m. \
                    Classificação da ocupação: C-2. Saídas de emergência com largura de 1,2 m. \
                    Serão instalados 4 extintores de pó químico. \
                    Iluminação de emergência com autonomia: 2h. \
                    Sistema com 2 hidrantes de parede.";
        let context = detect_document_context(&ExtractedDocument::from_text(text));
        assert_eq!(context.completeness_percent, 100);
        assert!(context.missing_elements.is_empty());
    }

    #[test]
    fn test_missing_elements_are_listed() {
        let context =
            detect_document_context(&ExtractedDocument::from_text("Memorial descritivo vazio."));
        assert_eq!(context.completeness_percent, 0);
        assert_eq!(context.missing_elements.len(), 8);
        assert!(context
            .missing_elements
            .contains(&"área construída".to_string()));
    }

    #[test]
    fn test_quality_rewards_structure() {
        let bare = ExtractedDocument::from_text("Memorial descritivo curto.");
        let structured = ExtractedDocument {
            text: "Memorial descritivo. ".repeat(120),
            sections: (0..4)
                .map(|i| DocumentSection {
                    title: format!("Seção {}", i),
                    content: "Conteúdo da seção.".to_string(),
                })
                .collect(),
            metadata: DocumentMetadata {
                pages: 10,
                title: None,
            },
        };

        let bare_quality = detect_document_context(&bare).quality_score;
        let structured_quality = detect_document_context(&structured).quality_score;
        assert!(structured_quality > bare_quality);
    }
}
