//! Responsible technical professional (IT-01).

use crate::error::AnalysisError;
use crate::extractors::facts::extract_responsible_engineer;
use memorial_types::{Severity, VerificationItem, VerificationResult};

/// A memorial must name the responsible professional with a CREA/CAU
/// registration. A name alone is only a partial identification.
pub fn check_responsible_engineer(text: &str) -> Result<VerificationItem, AnalysisError> {
    let item = match extract_responsible_engineer(text) {
        None => VerificationItem::new(
            "responsavel-tecnico",
            "Identificação do responsável técnico",
            VerificationResult::NaoConforme,
            "Responsável técnico não identificado no memorial.",
            "IT-01",
            Severity::High,
        )
        .with_suggestion("Informar o nome completo e o registro profissional (CREA/CAU) do responsável técnico."),

        Some(engineer) => match engineer.registration {
            Some(registration) => VerificationItem::new(
                "responsavel-tecnico",
                "Identificação do responsável técnico",
                VerificationResult::Conforme,
                format!(
                    "Responsável técnico identificado: {} ({}).",
                    engineer.name, registration
                ),
                "IT-01",
                Severity::Low,
            ),
            None => VerificationItem::new(
                "responsavel-tecnico",
                "Identificação do responsável técnico",
                VerificationResult::Parcial,
                format!(
                    "Responsável técnico {} citado sem número de registro profissional.",
                    engineer.name
                ),
                "IT-01",
                Severity::Medium,
            )
            .with_suggestion("Complementar a identificação com o número de registro no CREA ou CAU."),
        },
    };

    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_with_registration_is_conforme() {
        let item = check_responsible_engineer("Responsável Técnico: João Silva, CREA 12345").unwrap();
        assert_eq!(item.result, VerificationResult::Conforme);
        assert!(item.observation.contains("João Silva"));
        assert!(item.observation.contains("CREA 12345"));
    }

    #[test]
    fn test_name_without_registration_is_parcial() {
        let item = check_responsible_engineer("Responsável Técnico: Ana Souza").unwrap();
        assert_eq!(item.result, VerificationResult::Parcial);
        assert_eq!(item.severity, Severity::Medium);
    }

    #[test]
    fn test_missing_engineer_is_nao_conforme() {
        let item = check_responsible_engineer("Memorial sem identificação profissional.").unwrap();
        assert_eq!(item.result, VerificationResult::NaoConforme);
        assert_eq!(item.severity, Severity::High);
        assert!(item.suggestion.is_some());
    }
}
