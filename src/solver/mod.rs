//! The constraint-satisfaction solving engine.
//!
//! The pieces, leaves first: [`graph`] holds the static not-equal constraint
//! graph, [`domains`] the mutable candidate sets with snapshot/restore,
//! [`propagate`] the AC-3 engine, [`heuristics`] the MRV/LCV orderings, and
//! [`search`] the backtracking loop that ties them together. [`naive`] is
//! the domain-free baseline.

use serde::Serialize;

use crate::grid::Board;

pub mod domains;
pub mod graph;
pub mod heuristics;
pub mod naive;
pub mod propagate;
pub mod search;
pub mod stats;

pub use naive::NaiveSolver;
pub use search::CspSolver;
pub use stats::SearchStats;

/// The immutable configuration of one search session.
///
/// Every combination is a legal configuration; the toggles trade step count,
/// never correctness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchConfig {
    /// Run AC-3 locally after each tentative assignment, backtracking as
    /// soon as some domain empties.
    pub inference: bool,
    /// Select variables by minimum remaining values (ties by highest
    /// degree, then coordinate order) instead of enumeration order.
    pub mrv: bool,
    /// Order candidate values least-constraining first instead of
    /// ascending.
    pub lcv: bool,
}

impl SearchConfig {
    /// All three improvements enabled.
    pub fn full() -> Self {
        Self {
            inference: true,
            mrv: true,
            lcv: true,
        }
    }

    /// Every combination of the three toggles.
    pub fn all() -> [Self; 8] {
        std::array::from_fn(|bits| Self {
            inference: bits & 0b100 != 0,
            mrv: bits & 0b010 != 0,
            lcv: bits & 0b001 != 0,
        })
    }

    /// A short human-readable tag, e.g. `csp +inference +mrv`.
    pub fn label(&self) -> String {
        let mut label = String::from("csp");
        for (enabled, name) in [
            (self.inference, " +inference"),
            (self.mrv, " +mrv"),
            (self.lcv, " +lcv"),
        ] {
            if enabled {
                label.push_str(name);
            }
        }
        label
    }
}

/// The outcome of one solving session.
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    /// The completed board, or `None` when the search exhausted every
    /// branch without finding one.
    pub solution: Option<Board>,
    /// The input board as supplied, untouched by the search.
    pub original: Board,
    pub stats: SearchStats,
}

impl SolveReport {
    /// The one-line outcome summary.
    pub fn summary(&self) -> String {
        match self.solution {
            Some(_) => format!("Found solution in {} steps", self.stats.steps),
            None => format!("No solution found after {} steps", self.stats.steps),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn all_covers_every_combination() {
        let configs = SearchConfig::all();
        assert_eq!(configs.len(), 8);
        let mut unique: Vec<_> = configs.to_vec();
        unique.dedup();
        assert_eq!(unique.len(), 8);
        assert!(configs.contains(&SearchConfig::default()));
        assert!(configs.contains(&SearchConfig::full()));
    }

    #[test]
    fn labels_name_the_enabled_toggles() {
        assert_eq!(SearchConfig::default().label(), "csp");
        assert_eq!(SearchConfig::full().label(), "csp +inference +mrv +lcv");
        let mrv_only = SearchConfig {
            mrv: true,
            ..SearchConfig::default()
        };
        assert_eq!(mrv_only.label(), "csp +mrv");
    }

    #[test]
    fn summary_distinguishes_outcomes() {
        let found = SolveReport {
            solution: Some([[None; 9]; 9]),
            original: [[None; 9]; 9],
            stats: SearchStats {
                steps: 12,
                ..SearchStats::default()
            },
        };
        assert_eq!(found.summary(), "Found solution in 12 steps");

        let exhausted = SolveReport {
            solution: None,
            ..found
        };
        assert_eq!(exhausted.summary(), "No solution found after 12 steps");
    }
}
