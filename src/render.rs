//! Plain-text rendering of solve reports.
//!
//! Pure presentation: consumes a [`SolveReport`] and produces the iteration
//! table and the one-line summary. Residual-free records (fixed-point) show
//! a `-` placeholder in the `f(x)` column.

use crate::root_finding::report::SolveReport;
use std::fmt::Write;

/// Formats the iteration trace as a fixed-width table with columns
/// `Iter | x | f(x) | Error`.
#[must_use]
pub fn format_trace(report: &SolveReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<8} {:<20} {:<20} {:<20}", "Iter", "x", "f(x)", "Error");
    let _ = writeln!(out, "{}", "-".repeat(70));
    for row in &report.trace {
        let residual = row.residual().map_or_else(|| "-".to_string(), format_number);
        let _ = writeln!(
            out,
            "{:<8} {:<20} {:<20} {:<20}",
            row.iteration(),
            format_number(row.x()),
            residual,
            format_number(row.error()),
        );
    }
    out
}

/// One-line summary of the final estimate.
#[must_use]
pub fn format_summary(report: &SolveReport) -> String {
    format!(
        "Root: {}  Error: {}  Iterations: {}",
        format_number(report.root),
        format_number(report.error),
        report.iterations,
    )
}

/// Compact numeric formatting: fixed notation with trailing zeros trimmed
/// for moderate magnitudes, scientific notation otherwise.
fn format_number(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }
    let mag = v.abs();
    if (1e-4..1e12).contains(&mag) {
        let fixed = format!("{v:.12}");
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        format!("{v:.12e}")
    }
}
