//! Legacy simple checks kept for backward compatibility.
//!
//! These predate the threshold rules and only verify that basic facts are
//! declared. The orchestrator skips any legacy check whose id or
//! description overlaps an item already produced by the main registry.

use crate::error::AnalysisError;
use crate::extractors::facts::{extract_building_height, extract_floor_area, extract_hydrants};
use crate::rules::extinguishers::format_area;
use crate::rules::ComplianceRule;
use memorial_types::{Severity, VerificationItem, VerificationResult};

pub fn legacy_rules() -> Vec<ComplianceRule> {
    vec![
        ComplianceRule {
            instruction_code: "IT-04",
            id: "area-declarada",
            description: "Declaração da área construída",
            eval: check_declared_area,
        },
        ComplianceRule {
            instruction_code: "IT-04",
            id: "altura-declarada",
            description: "Declaração da altura da edificação",
            eval: check_declared_height,
        },
        ComplianceRule {
            instruction_code: "IT-22",
            id: "hidrantes-presenca",
            description: "Presença de sistema de hidrantes",
            eval: check_hydrant_presence,
        },
    ]
}

fn check_declared_area(text: &str) -> Result<VerificationItem, AnalysisError> {
    let item = match extract_floor_area(text) {
        Some(area) => VerificationItem::new(
            "area-declarada",
            "Declaração da área construída",
            VerificationResult::Conforme,
            format!("Área construída declarada: {} m².", format_area(area)),
            "IT-04",
            Severity::Low,
        ),
        None => VerificationItem::new(
            "area-declarada",
            "Declaração da área construída",
            VerificationResult::NaoConforme,
            "Área construída não declarada no memorial.",
            "IT-04",
            Severity::Medium,
        )
        .with_suggestion("Declarar a área construída total da edificação."),
    };
    Ok(item)
}

fn check_declared_height(text: &str) -> Result<VerificationItem, AnalysisError> {
    let item = match extract_building_height(text) {
        Some(height) => VerificationItem::new(
            "altura-declarada",
            "Declaração da altura da edificação",
            VerificationResult::Conforme,
            format!("Altura da edificação declarada: {:.1} m.", height),
            "IT-04",
            Severity::Low,
        ),
        None => VerificationItem::new(
            "altura-declarada",
            "Declaração da altura da edificação",
            VerificationResult::NaoConforme,
            "Altura da edificação não declarada no memorial.",
            "IT-04",
            Severity::Medium,
        )
        .with_suggestion("Declarar a altura da edificação para enquadramento das exigências."),
    };
    Ok(item)
}

fn check_hydrant_presence(text: &str) -> Result<VerificationItem, AnalysisError> {
    let mentions = extract_hydrants(text);

    let item = if mentions.is_empty() {
        VerificationItem::new(
            "hidrantes-presenca",
            "Presença de sistema de hidrantes",
            VerificationResult::NaoConforme,
            "Sistema de hidrantes ou mangotinhos não citado no memorial.",
            "IT-22",
            Severity::Medium,
        )
        .with_suggestion("Avaliar a exigência de hidrantes para a área e a ocupação da edificação.")
    } else {
        let total: u32 = mentions.iter().map(|m| m.quantity).sum();
        VerificationItem::new(
            "hidrantes-presenca",
            "Presença de sistema de hidrantes",
            VerificationResult::Conforme,
            format!("Sistema de hidrantes citado ({} ponto(s)).", total),
            "IT-22",
            Severity::Low,
        )
    };

    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::evaluate_all;

    #[test]
    fn test_legacy_presence_checks() {
        let text = "Área: 320 m². Altura da edificação: 9 m. Sistema com 2 hidrantes de parede.";
        let items = evaluate_all(text, &legacy_rules());
        assert_eq!(items.len(), 3);
        assert!(items
            .iter()
            .all(|i| i.result == VerificationResult::Conforme));
    }

    #[test]
    fn test_legacy_flags_missing_facts() {
        let items = evaluate_all("Memorial sem dados dimensionais.", &legacy_rules());
        assert!(items
            .iter()
            .all(|i| i.result == VerificationResult::NaoConforme));
    }
}
