//! Plain-text rendering for terminals

use std::fmt::Write;

use pricer_risk::sweep::{SweepRecord, SweepSummary, COLUMNS};

const WIDTH: usize = 14;

/// Render sweep records as a fixed-width table
pub fn render_table(records: &[SweepRecord]) -> String {
    let mut out = String::new();

    let header: Vec<String> = COLUMNS
        .iter()
        .map(|name| format!("{:>width$}", name, width = WIDTH))
        .collect();
    let _ = writeln!(out, "{}", header.join(" "));
    let _ = writeln!(out, "{}", "-".repeat((WIDTH + 1) * COLUMNS.len() - 1));

    for record in records {
        let cells: Vec<String> = record
            .values()
            .iter()
            .map(|value| format!("{:>width$.6e}", value, width = WIDTH))
            .collect();
        let _ = writeln!(out, "{}", cells.join(" "));
    }

    out
}

/// Render the per-estimator best error for one scenario
pub fn render_summary(name: &str, summary: &SweepSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Best achievable accuracy: {}", name);
    let _ = writeln!(out, "┌─────────────────┬──────────────┬──────────────┐");
    let _ = writeln!(out, "│ Estimator       │ min |error|  │ at h_rel     │");
    let _ = writeln!(out, "├─────────────────┼──────────────┼──────────────┤");
    for (estimator, best) in summary.iter() {
        let _ = writeln!(
            out,
            "│ {:<15} │ {:>12.3e} │ {:>12.3e} │",
            estimator.to_string(),
            best.error,
            best.h_rel
        );
    }
    let _ = write!(out, "└─────────────────┴──────────────┴──────────────┘");
    out
}
