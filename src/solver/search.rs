//! Depth-first backtracking search over the CSP model.
//!
//! One solver instance owns one session: the grid under mutation, the static
//! constraint graph, and the domain store. Construction validates the board;
//! solving runs a global AC-3 pass and then the recursive search, with the
//! heuristics and per-branch inference switched by [`SearchConfig`].

use tracing::{debug, trace};

use crate::{
    error::Result,
    grid::{Board, Grid},
    solver::{
        domains::DomainStore, graph::ConstraintGraph, heuristics, propagate, stats::SearchStats,
        SearchConfig, SolveReport,
    },
};

pub struct CspSolver {
    grid: Grid,
    graph: ConstraintGraph,
    domains: DomainStore,
    config: SearchConfig,
    stats: SearchStats,
}

impl CspSolver {
    /// Builds a solving session around `board`.
    ///
    /// Fails with [`crate::error::Error::InvalidBoard`] if the board already
    /// violates a constraint; an invalid board never reaches search.
    pub fn new(board: Board, config: SearchConfig) -> Result<Self> {
        let grid = Grid::new(board)?;
        let graph = ConstraintGraph::build(&grid);
        let domains = DomainStore::initial(&grid);
        Ok(Self {
            grid,
            graph,
            domains,
            config,
            stats: SearchStats::default(),
        })
    }

    /// Runs the session to completion.
    ///
    /// Search exhaustion is a valid terminal state, reported as a `None`
    /// solution in the [`SolveReport`], never as an error.
    pub fn solve(mut self) -> SolveReport {
        let seeds = propagate::global_arcs(&self.graph);
        if !propagate::ac3(&self.graph, &mut self.domains, seeds, &mut self.stats) {
            // The global pass proved the puzzle has no solution.
            return SolveReport {
                solution: None,
                original: *self.grid.original(),
                stats: self.stats,
            };
        }

        let solved = self.backtrack();
        debug!(solved, steps = self.stats.steps, "search finished");
        SolveReport {
            solution: solved.then(|| *self.grid.board()),
            original: *self.grid.original(),
            stats: self.stats,
        }
    }

    fn backtrack(&mut self) -> bool {
        self.stats.steps += 1;

        let Some(cell) = heuristics::select_variable(
            &self.grid,
            &self.graph,
            &self.domains,
            self.config.mrv,
        ) else {
            // No unassigned variable remains: total assignment found.
            return true;
        };

        let values =
            heuristics::order_values(&self.grid, &self.graph, &self.domains, cell, self.config.lcv);
        for value in values {
            if !self.grid.is_consistent(cell, value) {
                continue;
            }
            trace!(%cell, value, "trying assignment");
            self.grid.assign(cell, value);

            // With inference on, snapshot the domains, collapse the assigned
            // variable, and re-check each peer against it. A wiped-out
            // domain means this value cannot work; undo and try the next.
            let snapshot = self.config.inference.then(|| self.domains.snapshot());
            let consistent = if snapshot.is_some() {
                self.domains.collapse(cell, value);
                let arcs = propagate::local_arcs(&self.graph, cell);
                propagate::ac3(&self.graph, &mut self.domains, arcs, &mut self.stats)
            } else {
                true
            };

            if consistent && self.backtrack() {
                return true;
            }

            self.grid.unassign(cell);
            if let Some(snapshot) = snapshot {
                self.domains.restore(snapshot);
            }
            self.stats.backtracks += 1;
        }

        false
    }
}
