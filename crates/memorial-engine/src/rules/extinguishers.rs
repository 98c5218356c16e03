//! Portable extinguisher dimensioning (IT-21).

use crate::error::AnalysisError;
use crate::extractors::facts::{extract_extinguishers, extract_floor_area};
use memorial_types::{Severity, VerificationItem, VerificationResult};

/// One extinguisher unit per 150 m² of floor area.
const AREA_PER_EXTINGUISHER_M2: f64 = 150.0;

/// Format an area for observation text: "500" for whole values, "500.5"
/// otherwise.
pub(crate) fn format_area(area: f64) -> String {
    if area.fract() == 0.0 {
        format!("{}", area as u64)
    } else {
        format!("{}", area)
    }
}

pub fn check_extinguisher_count(text: &str) -> Result<VerificationItem, AnalysisError> {
    let mentions = extract_extinguishers(text);
    let area = extract_floor_area(text);

    let item = if mentions.is_empty() {
        VerificationItem::new(
            "quantidade-extintores",
            "Quantidade de extintores de incêndio",
            VerificationResult::NaoConforme,
            "Nenhum extintor de incêndio citado no memorial.",
            "IT-21",
            Severity::High,
        )
        .with_suggestion("Prever extintores portáteis distribuídos conforme a área e a classe de fogo.")
    } else {
        let total: u32 = mentions.iter().map(|m| m.quantity).sum();

        match area {
            None => VerificationItem::new(
                "quantidade-extintores",
                "Quantidade de extintores de incêndio",
                VerificationResult::Parcial,
                format!(
                    "{} extintores citados, mas a área construída não foi informada para o dimensionamento.",
                    total
                ),
                "IT-21",
                Severity::Medium,
            )
            .with_suggestion("Declarar a área construída para permitir a verificação do dimensionamento."),

            Some(area) => {
                let required = (area / AREA_PER_EXTINGUISHER_M2).ceil() as u32;
                if total >= required {
                    VerificationItem::new(
                        "quantidade-extintores",
                        "Quantidade de extintores de incêndio",
                        VerificationResult::Conforme,
                        format!(
                            "{} extintores atendem ao mínimo de {} para {}m².",
                            total,
                            required,
                            format_area(area)
                        ),
                        "IT-21",
                        Severity::Low,
                    )
                } else {
                    VerificationItem::new(
                        "quantidade-extintores",
                        "Quantidade de extintores de incêndio",
                        VerificationResult::NaoConforme,
                        format!(
                            "{} extintores insuficientes para {}m² (mínimo: {})",
                            total,
                            format_area(area),
                            required
                        ),
                        "IT-21",
                        Severity::High,
                    )
                    .with_suggestion("Aumentar a quantidade de extintores até o mínimo dimensionado.")
                }
            }
        }
    };

    Ok(item)
}
