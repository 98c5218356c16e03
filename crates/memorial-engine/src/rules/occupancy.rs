//! Occupancy classification (IT-04).

use crate::error::AnalysisError;
use crate::extractors::facts::extract_occupancy_code;
use memorial_types::{Severity, VerificationItem, VerificationResult};

/// Valid group/division codes for building occupancy.
pub const VALID_OCCUPANCY_CODES: &[&str] = &[
    "A-1", "A-2", "A-3",
    "B-1", "B-2",
    "C-1", "C-2", "C-3",
    "D",
    "E",
    "F-1", "F-2", "F-3", "F-4", "F-5", "F-6", "F-7", "F-8", "F-9", "F-10",
    "G",
    "H-1", "H-2", "H-3", "H-4", "H-5", "H-6",
    "I-1", "I-2", "I-3",
    "J-1", "J-2", "J-3", "J-4",
    "L",
    "M-1", "M-2", "M-3", "M-4",
];

/// The observation distinguishes a missing classification from a declared
/// but unrecognized one.
pub fn check_occupancy_classification(text: &str) -> Result<VerificationItem, AnalysisError> {
    let item = match extract_occupancy_code(text) {
        None => VerificationItem::new(
            "classificacao-ocupacao",
            "Classificação da ocupação",
            VerificationResult::NaoConforme,
            "Classificação de ocupação ausente: o memorial não declara grupo/divisão.",
            "IT-04",
            Severity::High,
        )
        .with_suggestion("Declarar o grupo e a divisão de ocupação da edificação (ex.: A-2, F-5)."),

        Some(code) if VALID_OCCUPANCY_CODES.contains(&code.as_str()) => VerificationItem::new(
            "classificacao-ocupacao",
            "Classificação da ocupação",
            VerificationResult::Conforme,
            format!("Classificação de ocupação {} declarada e válida.", code),
            "IT-04",
            Severity::Low,
        ),

        Some(code) => VerificationItem::new(
            "classificacao-ocupacao",
            "Classificação da ocupação",
            VerificationResult::NaoConforme,
            format!(
                "Classificação de ocupação inválida: \"{}\" não corresponde a nenhuma divisão reconhecida.",
                code
            ),
            "IT-04",
            Severity::High,
        )
        .with_suggestion("Corrigir o enquadramento para uma divisão reconhecida (ex.: A-2, F-5)."),
    };

    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_code_is_conforme() {
        let item = check_occupancy_classification("Classificação da ocupação: A-1").unwrap();
        assert_eq!(item.result, VerificationResult::Conforme);
    }

    #[test]
    fn test_bare_group_letters_are_valid() {
        for text in ["Grupo D", "Grupo E", "Grupo G", "Grupo L"] {
            let item = check_occupancy_classification(text).unwrap();
            assert_eq!(item.result, VerificationResult::Conforme, "{text}");
        }
    }

    #[test]
    fn test_invalid_code_mentions_invalid_not_missing() {
        let item = check_occupancy_classification("ocupação: Z-9").unwrap();
        assert_eq!(item.result, VerificationResult::NaoConforme);
        assert!(item.observation.contains("inválida"));
        assert!(!item.observation.contains("ausente"));
    }

    #[test]
    fn test_missing_code_mentions_missing() {
        let item = check_occupancy_classification("memorial de arquitetura geral").unwrap();
        assert_eq!(item.result, VerificationResult::NaoConforme);
        assert!(item.observation.contains("ausente"));
    }
}
