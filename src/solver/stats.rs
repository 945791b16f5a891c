//! Search cost counters and their tabular rendering.

use prettytable::{Cell, Row, Table};
use serde::Serialize;

use crate::solver::SolveReport;

/// Counters accumulated over one solving session. Reporting only; none of
/// these feed back into the search.
#[derive(Debug, Default, Clone, Copy, Serialize)]
pub struct SearchStats {
    /// Search calls made, incremented once per call regardless of outcome.
    pub steps: u64,
    /// Candidate values that were tried and undone.
    pub backtracks: u64,
    /// Arc revisions performed by AC-3.
    pub revisions: u64,
    /// Values pruned from domains by AC-3.
    pub prunings: u64,
}

/// One labelled solver run in a comparison.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonRow {
    pub label: String,
    pub solved: bool,
    pub stats: SearchStats,
}

impl ComparisonRow {
    pub fn new(label: impl Into<String>, report: &SolveReport) -> Self {
        Self {
            label: label.into(),
            solved: report.solution.is_some(),
            stats: report.stats,
        }
    }
}

/// Renders a comparison of solver configurations as a text table.
pub fn render_comparison(rows: &[ComparisonRow]) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Configuration"),
        Cell::new("Solved"),
        Cell::new("Steps"),
        Cell::new("Backtracks"),
        Cell::new("Revisions"),
        Cell::new("Prunings"),
    ]));

    for row in rows {
        table.add_row(Row::new(vec![
            Cell::new(&row.label),
            Cell::new(if row.solved { "yes" } else { "no" }),
            Cell::new(&row.stats.steps.to_string()),
            Cell::new(&row.stats.backtracks.to_string()),
            Cell::new(&row.stats.revisions.to_string()),
            Cell::new(&row.stats.prunings.to_string()),
        ]));
    }

    table.to_string()
}
