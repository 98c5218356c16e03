//! Finishing and lining materials (IT-10).

use crate::error::AnalysisError;
use crate::extractors::facts::extract_finishing_class;
use crate::patterns::FINISHING_MENTION_PATTERN;
use memorial_types::{Severity, VerificationItem, VerificationResult};

/// Memorials that do not describe finishing materials at all are treated as
/// out of scope for this control rather than non-compliant.
pub fn check_finishing_materials(text: &str) -> Result<VerificationItem, AnalysisError> {
    let mentioned = FINISHING_MENTION_PATTERN.is_match(text);

    let item = match (mentioned, extract_finishing_class(text)) {
        (false, _) => VerificationItem::new(
            "materiais-acabamento",
            "Classe dos materiais de acabamento",
            VerificationResult::NaoAplicavel,
            "Memorial não aborda materiais de acabamento e revestimento; controle não aplicável a esta análise.",
            "IT-10",
            Severity::Low,
        ),

        (true, Some(class)) => VerificationItem::new(
            "materiais-acabamento",
            "Classe dos materiais de acabamento",
            VerificationResult::Conforme,
            format!(
                "Materiais de acabamento e revestimento com classe {} declarada.",
                class
            ),
            "IT-10",
            Severity::Low,
        ),

        (true, None) => VerificationItem::new(
            "materiais-acabamento",
            "Classe dos materiais de acabamento",
            VerificationResult::Parcial,
            "Materiais de acabamento citados sem classe de reação ao fogo declarada.",
            "IT-10",
            Severity::Medium,
        )
        .with_suggestion("Classificar os materiais de piso, parede e teto quanto à propagação de chama."),
    };

    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_class_is_conforme() {
        let item =
            check_finishing_materials("Materiais de acabamento classe II-A em todas as áreas.")
                .unwrap();
        assert_eq!(item.result, VerificationResult::Conforme);
        assert!(item.observation.contains("II-A"));
    }

    #[test]
    fn test_mention_without_class_is_parcial() {
        let item = check_finishing_materials("O revestimento das paredes será cerâmico.").unwrap();
        assert_eq!(item.result, VerificationResult::Parcial);
    }

    #[test]
    fn test_no_mention_is_nao_aplicavel() {
        let item = check_finishing_materials("Memorial de instalações hidráulicas.").unwrap();
        assert_eq!(item.result, VerificationResult::NaoAplicavel);
    }
}
