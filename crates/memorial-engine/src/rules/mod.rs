//! Deterministic compliance rules.
//!
//! Rules are explicit structs in a registry, all processed by the same
//! evaluator. Each rule reads the entire document text and produces exactly
//! one [`VerificationItem`]; a failing rule is converted into a degraded
//! NAO_CONFORME item instead of aborting the batch.

pub mod egress;
pub mod engineer;
pub mod extinguishers;
pub mod finishes;
pub mod legacy;
pub mod lighting;
pub mod occupancy;
pub mod reserve;

use crate::error::AnalysisError;
use memorial_types::{Severity, VerificationItem, VerificationResult};
use tracing::warn;

pub type RuleFn = fn(&str) -> Result<VerificationItem, AnalysisError>;

/// One named verification, grouped under a technical-instruction code.
/// A code may own several rules.
#[derive(Debug, Clone)]
pub struct ComplianceRule {
    pub instruction_code: &'static str,
    pub id: &'static str,
    pub description: &'static str,
    pub eval: RuleFn,
}

/// Full rule registry, in corpus order.
pub fn registry() -> Vec<ComplianceRule> {
    vec![
        ComplianceRule {
            instruction_code: "IT-01",
            id: "responsavel-tecnico",
            description: "Identificação do responsável técnico",
            eval: engineer::check_responsible_engineer,
        },
        ComplianceRule {
            instruction_code: "IT-04",
            id: "classificacao-ocupacao",
            description: "Classificação da ocupação",
            eval: occupancy::check_occupancy_classification,
        },
        ComplianceRule {
            instruction_code: "IT-10",
            id: "materiais-acabamento",
            description: "Classe dos materiais de acabamento",
            eval: finishes::check_finishing_materials,
        },
        ComplianceRule {
            instruction_code: "IT-11",
            id: "largura-saidas",
            description: "Largura das saídas de emergência",
            eval: egress::check_exit_width,
        },
        ComplianceRule {
            instruction_code: "IT-18",
            id: "autonomia-iluminacao",
            description: "Autonomia da iluminação de emergência",
            eval: lighting::check_lighting_autonomy,
        },
        ComplianceRule {
            instruction_code: "IT-21",
            id: "quantidade-extintores",
            description: "Quantidade de extintores de incêndio",
            eval: extinguishers::check_extinguisher_count,
        },
        ComplianceRule {
            instruction_code: "IT-22",
            id: "reserva-incendio",
            description: "Reserva técnica de incêndio",
            eval: reserve::check_fire_reserve,
        },
    ]
}

/// Evaluate every rule over the full document text. Never fails: a rule
/// error becomes a NAO_CONFORME item tagged with the rule id and the
/// instruction code.
pub fn evaluate_all(text: &str, rules: &[ComplianceRule]) -> Vec<VerificationItem> {
    rules
        .iter()
        .map(|rule| match (rule.eval)(text) {
            Ok(item) => item,
            Err(err) => {
                warn!(
                    rule = rule.id,
                    instruction = rule.instruction_code,
                    error = %err,
                    "verificação recuperada após falha"
                );
                VerificationItem::new(
                    rule.id,
                    rule.description,
                    VerificationResult::NaoConforme,
                    format!("Verificação não concluída: {}", err),
                    rule.instruction_code,
                    Severity::Medium,
                )
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failing_rule(_text: &str) -> Result<VerificationItem, AnalysisError> {
        Err(AnalysisError::rule(
            "regra-instavel",
            "IT-99",
            "estado interno inconsistente",
        ))
    }

    #[test]
    fn test_failed_rule_becomes_nao_conforme_item() {
        let rules = vec![ComplianceRule {
            instruction_code: "IT-99",
            id: "regra-instavel",
            description: "Regra que sempre falha",
            eval: failing_rule,
        }];

        let items = evaluate_all("qualquer texto", &rules);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].result, VerificationResult::NaoConforme);
        assert_eq!(items[0].id, "regra-instavel");
        assert_eq!(items[0].instruction_ref, "IT-99");
        assert!(items[0].observation.contains("estado interno inconsistente"));
    }

    #[test]
    fn test_failure_does_not_abort_the_batch() {
        let mut rules = registry();
        rules.push(ComplianceRule {
            instruction_code: "IT-99",
            id: "regra-instavel",
            description: "Regra que sempre falha",
            eval: failing_rule,
        });

        let items = evaluate_all("memorial vazio de fatos", &rules);
        assert_eq!(items.len(), rules.len());
        assert!(items.iter().all(|i| !i.observation.is_empty()));
    }

    #[test]
    fn test_registry_ids_are_unique() {
        let rules = registry();
        let mut ids: Vec<_> = rules.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), rules.len());
    }
}
