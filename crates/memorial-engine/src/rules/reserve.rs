//! Fire-reserve volume (IT-22).

use crate::error::AnalysisError;
use crate::extractors::facts::{extract_fire_reserve_liters, extract_floor_area};
use crate::rules::extinguishers::format_area;
use memorial_types::{Severity, VerificationItem, VerificationResult};

/// Required reserve: 15 liters per m² of floor area.
const LITERS_PER_M2: f64 = 15.0;

pub fn check_fire_reserve(text: &str) -> Result<VerificationItem, AnalysisError> {
    let area = extract_floor_area(text);

    let item = match extract_fire_reserve_liters(text) {
        None => VerificationItem::new(
            "reserva-incendio",
            "Reserva técnica de incêndio",
            VerificationResult::NaoConforme,
            "Reserva técnica de incêndio não informada no memorial.",
            "IT-22",
            Severity::High,
        )
        .with_suggestion("Declarar o volume da reserva técnica de incêndio do reservatório."),

        Some(volume) => match area {
            None => VerificationItem::new(
                "reserva-incendio",
                "Reserva técnica de incêndio",
                VerificationResult::Parcial,
                format!(
                    "Reserva de {:.0} litros informada, mas sem área construída para verificar o dimensionamento.",
                    volume
                ),
                "IT-22",
                Severity::Medium,
            ),

            Some(area) => {
                let required = area * LITERS_PER_M2;
                if volume >= required {
                    VerificationItem::new(
                        "reserva-incendio",
                        "Reserva técnica de incêndio",
                        VerificationResult::Conforme,
                        format!(
                            "Reserva de {:.0} litros atende ao mínimo de {:.0} litros para {}m².",
                            volume,
                            required,
                            format_area(area)
                        ),
                        "IT-22",
                        Severity::Low,
                    )
                } else {
                    VerificationItem::new(
                        "reserva-incendio",
                        "Reserva técnica de incêndio",
                        VerificationResult::NaoConforme,
                        format!(
                            "Reserva de {:.0} litros inferior ao mínimo de {:.0} litros para {}m².",
                            volume,
                            required,
                            format_area(area)
                        ),
                        "IT-22",
                        Severity::High,
                    )
                    .with_suggestion("Ampliar o reservatório até o volume mínimo da reserva de incêndio.")
                }
            }
        },
    };

    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sufficient_reserve() {
        let text = "Área construída: 500 m². Reserva de incêndio: 12.000 litros.";
        let item = check_fire_reserve(text).unwrap();
        // required = 500 * 15 = 7500 L
        assert_eq!(item.result, VerificationResult::Conforme);
    }

    #[test]
    fn test_insufficient_reserve() {
        let text = "Área construída: 1.000 m². Reserva técnica de incêndio de 10 m³.";
        let item = check_fire_reserve(text).unwrap();
        // required = 15000 L, declared 10000 L
        assert_eq!(item.result, VerificationResult::NaoConforme);
        assert!(item.observation.contains("15000"));
    }

    #[test]
    fn test_missing_reserve() {
        let item = check_fire_reserve("Área construída: 500 m².").unwrap();
        assert_eq!(item.result, VerificationResult::NaoConforme);
    }

    #[test]
    fn test_reserve_without_area_is_parcial() {
        let item = check_fire_reserve("Reserva de incêndio: 8.000 litros.").unwrap();
        assert_eq!(item.result, VerificationResult::Parcial);
    }
}
