//! Emergency-lighting autonomy (IT-18).

use crate::error::AnalysisError;
use crate::extractors::facts::extract_lighting_autonomy;
use crate::patterns::EMERGENCY_LIGHTING_PATTERN;
use memorial_types::{Severity, VerificationItem, VerificationResult};

const MIN_AUTONOMY_HOURS: f64 = 2.0;

/// Format hours without a trailing ".0" for whole values.
fn format_hours(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{}", hours as u64)
    } else {
        format!("{}", hours)
    }
}

pub fn check_lighting_autonomy(text: &str) -> Result<VerificationItem, AnalysisError> {
    let has_lighting = EMERGENCY_LIGHTING_PATTERN.is_match(text);
    let autonomy = extract_lighting_autonomy(text);

    let item = match (has_lighting, autonomy) {
        (false, _) => VerificationItem::new(
            "autonomia-iluminacao",
            "Autonomia da iluminação de emergência",
            VerificationResult::NaoConforme,
            "Sistema de iluminação de emergência não citado no memorial.",
            "IT-18",
            Severity::High,
        )
        .with_suggestion("Prever iluminação de emergência nas rotas de fuga com autonomia mínima de 2 horas."),

        (true, None) => VerificationItem::new(
            "autonomia-iluminacao",
            "Autonomia da iluminação de emergência",
            VerificationResult::Parcial,
            "Iluminação de emergência citada sem autonomia declarada.",
            "IT-18",
            Severity::Medium,
        )
        .with_suggestion("Declarar a autonomia do sistema (mínimo de 2 horas)."),

        (true, Some(hours)) if hours >= MIN_AUTONOMY_HOURS => VerificationItem::new(
            "autonomia-iluminacao",
            "Autonomia da iluminação de emergência",
            VerificationResult::Conforme,
            format!(
                "Autonomia de {}h atende ao mínimo de 2 horas.",
                format_hours(hours)
            ),
            "IT-18",
            Severity::Low,
        ),

        (true, Some(hours)) => VerificationItem::new(
            "autonomia-iluminacao",
            "Autonomia da iluminação de emergência",
            VerificationResult::NaoConforme,
            format!(
                "Autonomia de {}h inferior ao mínimo exigido de 2 horas.",
                format_hours(hours)
            ),
            "IT-18",
            Severity::High,
        )
        .with_suggestion("Adequar baterias ou blocos autônomos para autonomia mínima de 2 horas."),
    };

    Ok(item)
}
