//! The AC-3 arc-consistency engine.
//!
//! An arc `(x, y)` demands that every value in `x`'s domain has support in
//! `y`'s domain under the not-equal constraint. The engine drains a FIFO
//! work queue of arcs, pruning unsupported values until a fixed point or
//! until some domain empties. Because domains only shrink, the queue is
//! self-terminating.
//!
//! An emptied domain is reported as `false`: it is a recoverable signal the
//! search uses to backtrack, never an error.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, trace};

use crate::{
    grid::Cell,
    solver::{domains::DomainStore, graph::ConstraintGraph, stats::SearchStats},
};

/// A FIFO queue of arcs that skips arcs already waiting.
///
/// Deduplication is a pure work saving: revising a queued arc twice is a
/// no-op the second time.
#[derive(Debug, Default)]
struct ArcQueue {
    queue: VecDeque<(Cell, Cell)>,
    members: HashSet<(Cell, Cell)>,
}

impl ArcQueue {
    fn push_back(&mut self, arc: (Cell, Cell)) {
        if self.members.insert(arc) {
            self.queue.push_back(arc);
        }
    }

    fn pop_front(&mut self) -> Option<(Cell, Cell)> {
        let arc = self.queue.pop_front()?;
        self.members.remove(&arc);
        Some(arc)
    }
}

/// Every ordered pair `(x, y)` with `y` a peer of `x`; seeds the global
/// propagation pass before search starts.
pub fn global_arcs(graph: &ConstraintGraph) -> Vec<(Cell, Cell)> {
    graph
        .variables()
        .iter()
        .flat_map(|&x| graph.peers(x).iter().map(move |&y| (x, y)))
        .collect()
}

/// Arcs `(peer, cell)` for every peer of a just-assigned cell: each peer's
/// domain must be re-checked against the variable that shrank.
pub fn local_arcs(graph: &ConstraintGraph, cell: Cell) -> Vec<(Cell, Cell)> {
    graph.peers(cell).iter().map(|&peer| (peer, cell)).collect()
}

/// Runs AC-3 from the given seed arcs, mutating `domains` in place.
///
/// Returns `true` when the queue drains with every domain non-empty, and
/// `false` as soon as a revision empties a domain (local inconsistency).
/// On `false` the domains are left partially pruned; the caller is expected
/// to restore its snapshot.
pub fn ac3(
    graph: &ConstraintGraph,
    domains: &mut DomainStore,
    seeds: Vec<(Cell, Cell)>,
    stats: &mut SearchStats,
) -> bool {
    let mut queue = ArcQueue::default();
    for arc in seeds {
        queue.push_back(arc);
    }

    while let Some((x, y)) = queue.pop_front() {
        stats.revisions += 1;
        if revise(domains, x, y) {
            stats.prunings += 1;
            if domains.is_empty(x) {
                trace!(%x, %y, "domain emptied during revision");
                return false;
            }
            // x shrank: every other neighbour's consistency with x must be
            // re-checked.
            for &z in graph.peers(x) {
                if z != y {
                    queue.push_back((z, x));
                }
            }
        }
    }

    debug!("propagation reached a fixed point");
    true
}

/// Makes `x` arc-consistent with `y`; true if a value was removed.
///
/// Under the not-equal constraint a value `vx` lacks support in `y` exactly
/// when `y`'s domain is the singleton `{vx}`, so at most one value can ever
/// be pruned per revision.
fn revise(domains: &mut DomainStore, x: Cell, y: Cell) -> bool {
    match domains.singleton(y) {
        Some(value) => domains.remove(x, value),
        None => false,
    }
}
