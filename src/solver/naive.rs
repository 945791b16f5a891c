//! The brute-force baseline: depth-first search with no domain model.
//!
//! Selects the first blank cell in row-major order and tries the digits 1-9
//! in ascending order directly against the grid. No propagation, no
//! ordering; this is the degenerate case of the search loop the CSP engine
//! is measured against.

use tracing::debug;

use crate::{
    error::Result,
    grid::{Board, Grid},
    solver::{stats::SearchStats, SolveReport},
};

pub struct NaiveSolver {
    grid: Grid,
    stats: SearchStats,
}

impl NaiveSolver {
    /// Validates the board and builds a session; same intake contract as
    /// [`crate::solver::CspSolver`].
    pub fn new(board: Board) -> Result<Self> {
        Ok(Self {
            grid: Grid::new(board)?,
            stats: SearchStats::default(),
        })
    }

    pub fn solve(mut self) -> SolveReport {
        let solved = self.backtrack();
        debug!(solved, steps = self.stats.steps, "naive search finished");
        SolveReport {
            solution: solved.then(|| *self.grid.board()),
            original: *self.grid.original(),
            stats: self.stats,
        }
    }

    fn backtrack(&mut self) -> bool {
        self.stats.steps += 1;

        let Some(cell) = self.grid.first_unassigned() else {
            return true;
        };

        for value in 1..=9 {
            if self.grid.is_consistent(cell, value) {
                self.grid.assign(cell, value);
                if self.backtrack() {
                    return true;
                }
                self.grid.unassign(cell);
                self.stats.backtracks += 1;
            }
        }
        false
    }
}
