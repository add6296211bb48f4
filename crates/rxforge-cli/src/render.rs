use rxforge::core::catalog::Catalog;
use rxforge::core::models::history::HistoryEntry;
use rxforge::core::models::trial::{Metrics, PERCENT_MAX, TrialResult};
use std::fmt::Write;

const CHART_WIDTH: usize = 40;
const LABEL_WIDTH: usize = 14;

/// Renders the result report shown after a run.
pub fn render_report(result: &TrialResult, disease: &str) -> String {
    let m = &result.metrics;
    let mut out = String::new();
    let _ = writeln!(out, "Generated Drug:");
    let _ = writeln!(out, "  {}", result.display_name);
    let _ = writeln!(out, "Molecule Token:");
    let _ = writeln!(out, "  {}", result.token);
    let _ = writeln!(out, "Test Results for {}:", disease);
    let _ = writeln!(out, "  Efficacy: {:.1}%", m.efficacy);
    let _ = writeln!(out, "  Safety: {:.1}%", m.safety);
    let _ = writeln!(out, "  Side Effects Severity: {:.1}%", m.side_effects);
    let _ = writeln!(out, "  Potency: {:.1}%", m.potency);
    let _ = writeln!(out, "  Toxicity: {:.1}%", m.toxicity);
    let _ = writeln!(out, "  Overall: {}", result.verdict);
    out
}

fn bar(value: f64) -> String {
    let filled = ((value / PERCENT_MAX) * CHART_WIDTH as f64).round();
    let filled = filled.clamp(0.0, CHART_WIDTH as f64) as usize;
    format!("{}{}", "#".repeat(filled), ".".repeat(CHART_WIDTH - filled))
}

/// Renders the metrics as two horizontal bar series on a shared 0-100 scale.
pub fn render_chart(metrics: &Metrics) -> String {
    let series: [(&str, &[(&str, f64)]); 2] = [
        (
            "Positive Metrics (%)",
            &[
                ("Efficacy", metrics.efficacy),
                ("Safety", metrics.safety),
                ("Potency", metrics.potency),
            ],
        ),
        (
            "Negative Metrics (%)",
            &[
                ("Side Effects", metrics.side_effects),
                ("Toxicity", metrics.toxicity),
            ],
        ),
    ];

    let mut out = String::new();
    for (title, rows) in series {
        let _ = writeln!(out, "{}", title);
        for (label, value) in rows {
            let _ = writeln!(
                out,
                "  {:<width$}|{}| {:>5.1}",
                label,
                bar(*value),
                value,
                width = LABEL_WIDTH
            );
        }
    }
    out
}

pub fn render_history(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return "No trials recorded yet.\n".to_string();
    }
    let mut out = String::new();
    let _ = writeln!(out, "{:>4}  {:<8}  {:<24}  Compound", "#", "Result", "Disease");
    for (i, entry) in entries.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>4}  {:<8}  {:<24}  {}",
            i + 1,
            entry.result.to_string(),
            entry.disease,
            entry.compound
        );
    }
    out
}

pub fn render_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Base compounds:");
    for (key, base) in catalog.bases() {
        let _ = writeln!(out, "  {:<18} {} [{}]", key, base.name, base.token);
    }
    let _ = writeln!(out, "Modifiers (efficacy x safety x side effects):");
    let mut any = false;
    for (name, effect) in catalog.modifiers() {
        any = true;
        let _ = writeln!(
            out,
            "  {:<18} {:.2} x {:.2} x {:.2}",
            name, effect.efficacy, effect.safety, effect.side_effects
        );
    }
    if !any {
        let _ = writeln!(out, "  (none; every modifier is neutral)");
    }
    out
}
