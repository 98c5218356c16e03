//! Human-readable multi-section summary of an analysis.

use std::fmt::Write;

use memorial_types::{DocumentContext, ExtractedDocument, VerificationStats};

pub fn build_summary(
    document: &ExtractedDocument,
    context: &DocumentContext,
    stats: &VerificationStats,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "RELATÓRIO DE ANÁLISE DE CONFORMIDADE");
    let _ = writeln!(out, "====================================");
    let _ = writeln!(out);

    let _ = writeln!(out, "Documento");
    let _ = writeln!(out, "  Tipo detectado: {}", context.document_type.name());
    let _ = writeln!(out, "  Páginas: {}", document.metadata.pages);
    let _ = writeln!(out, "  Seções: {}", document.sections.len());
    let _ = writeln!(
        out,
        "  Completude: {}% | Qualidade: {}",
        context.completeness_percent, context.quality_score
    );
    if !context.missing_elements.is_empty() {
        let _ = writeln!(
            out,
            "  Elementos ausentes: {}",
            context.missing_elements.join(", ")
        );
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Verificações ({} itens)", stats.total);
    let _ = writeln!(out, "  Conformes: {}", stats.conforme);
    let _ = writeln!(out, "  Não conformes: {}", stats.nao_conforme);
    let _ = writeln!(out, "  Parciais: {}", stats.parcial);
    let _ = writeln!(out, "  Não aplicáveis: {}", stats.nao_aplicavel);
    let _ = writeln!(
        out,
        "  Severidade: {} críticas, {} altas, {} médias, {} baixas",
        stats.critical, stats.high, stats.medium, stats.low
    );
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "Conformidade final: {}% ({} de {} itens aplicáveis)",
        stats.conformity_percent, stats.conforme, stats.applicable
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::get_stats;
    use crate::context::detect_document_context;
    use memorial_types::{Severity, VerificationItem, VerificationResult};

    #[test]
    fn test_summary_contains_all_sections() {
        let document = ExtractedDocument::from_text("Memorial descritivo da edificação.");
        let context = detect_document_context(&document);
        let items = vec![VerificationItem::new(
            "t",
            "Teste",
            VerificationResult::Conforme,
            "obs",
            "IT-01",
            Severity::Low,
        )];
        let stats = get_stats(&items);

        let summary = build_summary(&document, &context, &stats);
        assert!(summary.contains("RELATÓRIO DE ANÁLISE"));
        assert!(summary.contains("Tipo detectado: Memorial Descritivo"));
        assert!(summary.contains("Conformes: 1"));
        assert!(summary.contains("Conformidade final: 100%"));
    }
}
