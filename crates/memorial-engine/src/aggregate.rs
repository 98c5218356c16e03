//! Aggregation of verification items into counts and the final
//! conformity percentage.

use memorial_types::{Severity, VerificationItem, VerificationResult, VerificationStats};

/// Count items by result and severity and compute the conformity
/// percentage over applicable items (everything except NAO_APLICAVEL).
pub fn get_stats(items: &[VerificationItem]) -> VerificationStats {
    let total = items.len();

    let count_result = |r: VerificationResult| items.iter().filter(|i| i.result == r).count();
    let count_severity = |s: Severity| items.iter().filter(|i| i.severity == s).count();

    let conforme = count_result(VerificationResult::Conforme);
    let nao_conforme = count_result(VerificationResult::NaoConforme);
    let parcial = count_result(VerificationResult::Parcial);
    let nao_aplicavel = count_result(VerificationResult::NaoAplicavel);

    let applicable = total - nao_aplicavel;
    let conformity_percent = if applicable == 0 {
        0
    } else {
        ((conforme as f64 / applicable as f64) * 100.0).round() as u8
    };

    VerificationStats {
        total,
        conforme,
        nao_conforme,
        parcial,
        nao_aplicavel,
        critical: count_severity(Severity::Critical),
        high: count_severity(Severity::High),
        medium: count_severity(Severity::Medium),
        low: count_severity(Severity::Low),
        applicable,
        conformity_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(result: VerificationResult, severity: Severity) -> VerificationItem {
        VerificationItem::new("t", "Teste", result, "obs", "IT-00", severity)
    }

    #[test]
    fn test_counts_and_percentage() {
        let items = vec![
            item(VerificationResult::Conforme, Severity::Low),
            item(VerificationResult::Conforme, Severity::Low),
            item(VerificationResult::NaoConforme, Severity::Critical),
            item(VerificationResult::Parcial, Severity::Medium),
            item(VerificationResult::NaoAplicavel, Severity::Low),
        ];

        let stats = get_stats(&items);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.conforme, 2);
        assert_eq!(stats.nao_conforme, 1);
        assert_eq!(stats.parcial, 1);
        assert_eq!(stats.nao_aplicavel, 1);
        assert_eq!(stats.applicable, 4);
        assert_eq!(stats.critical, 1);
        // 2 of 4 applicable
        assert_eq!(stats.conformity_percent, 50);
    }

    #[test]
    fn test_rounding() {
        let items = vec![
            item(VerificationResult::Conforme, Severity::Low),
            item(VerificationResult::NaoConforme, Severity::High),
            item(VerificationResult::NaoConforme, Severity::High),
        ];
        // 1/3 = 33.33 -> 33
        assert_eq!(get_stats(&items).conformity_percent, 33);
    }

    #[test]
    fn test_empty_and_all_inapplicable() {
        assert_eq!(get_stats(&[]).conformity_percent, 0);

        let items = vec![
            item(VerificationResult::NaoAplicavel, Severity::Low),
            item(VerificationResult::NaoAplicavel, Severity::Low),
        ];
        let stats = get_stats(&items);
        assert_eq!(stats.applicable, 0);
        assert_eq!(stats.conformity_percent, 0);
    }

    #[test]
    fn test_percentage_bounds() {
        let items = vec![item(VerificationResult::Conforme, Severity::Low)];
        assert_eq!(get_stats(&items).conformity_percent, 100);
    }
}
