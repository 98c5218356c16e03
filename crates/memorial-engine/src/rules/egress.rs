//! Emergency-exit width (IT-11).

use crate::error::AnalysisError;
use crate::extractors::facts::{extract_exit_width, extract_floor_area, extract_occupant_load};
use memorial_types::{Severity, VerificationItem, VerificationResult};

/// Minimum exit width in meters for the given building size.
///
/// 1.2 m above 750 m² or 200 occupants; 1.1 m above 300 m² or 100
/// occupants; 0.9 m otherwise.
pub fn required_exit_width(area: Option<f64>, occupant_load: Option<u32>) -> f64 {
    let area = area.unwrap_or(0.0);
    let load = occupant_load.unwrap_or(0);

    if area > 750.0 || load > 200 {
        1.2
    } else if area > 300.0 || load > 100 {
        1.1
    } else {
        0.9
    }
}

pub fn check_exit_width(text: &str) -> Result<VerificationItem, AnalysisError> {
    let area = extract_floor_area(text);
    let load = extract_occupant_load(text);
    let required = required_exit_width(area, load);

    let item = match extract_exit_width(text) {
        None => VerificationItem::new(
            "largura-saidas",
            "Largura das saídas de emergência",
            VerificationResult::NaoConforme,
            format!(
                "Largura das saídas de emergência não informada (mínimo exigido: {:.1} m).",
                required
            ),
            "IT-11",
            Severity::Critical,
        )
        .with_suggestion("Dimensionar e declarar a largura das saídas, rotas de fuga e escadas."),

        Some(width) if width >= required => VerificationItem::new(
            "largura-saidas",
            "Largura das saídas de emergência",
            VerificationResult::Conforme,
            format!(
                "Largura de {:.2} m atende ao mínimo de {:.1} m para a edificação.",
                width, required
            ),
            "IT-11",
            Severity::Low,
        ),

        Some(width) => VerificationItem::new(
            "largura-saidas",
            "Largura das saídas de emergência",
            VerificationResult::NaoConforme,
            format!(
                "Largura de {:.2} m inferior ao mínimo de {:.1} m exigido para a edificação.",
                width, required
            ),
            "IT-11",
            Severity::High,
        )
        .with_suggestion("Ampliar as saídas de emergência até a largura mínima exigida."),
    };

    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_width_thresholds() {
        assert_eq!(required_exit_width(Some(800.0), None), 1.2);
        assert_eq!(required_exit_width(None, Some(250)), 1.2);
        assert_eq!(required_exit_width(Some(400.0), None), 1.1);
        assert_eq!(required_exit_width(None, Some(150)), 1.1);
        assert_eq!(required_exit_width(Some(200.0), Some(50)), 0.9);
        assert_eq!(required_exit_width(None, None), 0.9);
        // boundary values stay in the lower band
        assert_eq!(required_exit_width(Some(750.0), None), 1.1);
        assert_eq!(required_exit_width(Some(300.0), Some(100)), 0.9);
    }

    #[test]
    fn test_large_building_with_adequate_width() {
        let text = "Área construída: 800 m². Saídas de emergência com largura de 1,2 m.";
        let item = check_exit_width(text).unwrap();
        assert_eq!(item.result, VerificationResult::Conforme);
    }

    #[test]
    fn test_large_building_with_narrow_exit() {
        let text = "Área construída: 800 m². Saídas de emergência com largura de 1,0 m.";
        let item = check_exit_width(text).unwrap();
        assert_eq!(item.result, VerificationResult::NaoConforme);
        assert!(item.observation.contains("1.2 m"));
    }

    #[test]
    fn test_missing_width_is_critical() {
        let item = check_exit_width("Área construída: 800 m².").unwrap();
        assert_eq!(item.result, VerificationResult::NaoConforme);
        assert_eq!(item.severity, Severity::Critical);
    }
}
