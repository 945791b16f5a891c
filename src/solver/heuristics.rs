//! Variable-selection and value-ordering heuristics for the search.
//!
//! Both heuristics are advisory: they change the order in which the search
//! explores branches (and hence the step count), never which solutions
//! exist. Every ordering below is fully deterministic.

use std::cmp::Reverse;

use crate::{
    grid::{Cell, Grid},
    solver::{domains::DomainStore, graph::ConstraintGraph},
};

/// Picks the next variable to branch on, or `None` when all are assigned.
///
/// With `mrv` set this is minimum-remaining-values: the variable with the
/// smallest current domain, ties broken by highest degree (most constrained
/// first), then by coordinate order as the final deterministic tie-break.
/// Without it, variables are taken in the graph's fixed row-major order.
pub fn select_variable(
    grid: &Grid,
    graph: &ConstraintGraph,
    domains: &DomainStore,
    mrv: bool,
) -> Option<Cell> {
    let mut unassigned = graph
        .variables()
        .iter()
        .copied()
        .filter(|&cell| grid.value(cell).is_none());

    if mrv {
        unassigned.min_by_key(|&cell| (domains.len(cell), Reverse(graph.degree(cell)), cell))
    } else {
        unassigned.next()
    }
}

/// Orders the candidate values of `cell`.
///
/// With `lcv` set this is least-constraining-value: candidates ascending by
/// how often they appear in the current domains of still-unassigned peers,
/// ties in natural value order. Without it, the domain's natural ascending
/// order is used.
pub fn order_values(
    grid: &Grid,
    graph: &ConstraintGraph,
    domains: &DomainStore,
    cell: Cell,
    lcv: bool,
) -> Vec<u8> {
    let mut values: Vec<u8> = domains.values(cell).collect();
    if lcv {
        let conflicts = |value: u8| {
            graph
                .peers(cell)
                .iter()
                .filter(|&&peer| grid.value(peer).is_none() && domains.contains(peer, value))
                .count()
        };
        // Stable sort keeps the natural value order among equal counts.
        values.sort_by_key(|&value| conflicts(value));
    }
    values
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::grid::{Cell, Grid};

    fn setup() -> (Grid, ConstraintGraph, DomainStore) {
        let grid = Grid::empty();
        let graph = ConstraintGraph::build(&grid);
        let domains = DomainStore::initial(&grid);
        (grid, graph, domains)
    }

    #[test]
    fn without_mrv_takes_row_major_order() {
        let (grid, graph, domains) = setup();
        assert_eq!(
            select_variable(&grid, &graph, &domains, false),
            Some(Cell::new(0, 0))
        );
    }

    #[test]
    fn mrv_prefers_smallest_domain() {
        let (grid, graph, mut domains) = setup();
        let tight = Cell::new(5, 5);
        domains.remove(tight, 1);
        domains.remove(tight, 2);
        assert_eq!(
            select_variable(&grid, &graph, &domains, true),
            Some(tight)
        );
    }

    #[test]
    fn mrv_ties_fall_back_to_coordinate_order() {
        // All domains and degrees equal on an empty grid.
        let (grid, graph, domains) = setup();
        assert_eq!(
            select_variable(&grid, &graph, &domains, true),
            Some(Cell::new(0, 0))
        );
    }

    #[test]
    fn mrv_breaks_domain_ties_by_degree() {
        // One given at (0, 8): every cell sharing its row, column, or box
        // drops to degree 19 and domain size 8. Shrinking the domain of the
        // unrelated (8, 0) to size 8 as well makes it the only size-8 cell
        // with full degree 20, so it must win the tie despite its late
        // coordinate.
        let mut board: crate::grid::Board = [[None; 9]; 9];
        board[0][8] = Some(9);
        let grid = Grid::new(board).unwrap();
        let graph = ConstraintGraph::build(&grid);
        let mut domains = DomainStore::initial(&grid);

        let far = Cell::new(8, 0);
        let near = Cell::new(0, 0);
        domains.remove(far, 9);
        assert_eq!(domains.len(far), domains.len(near));
        assert!(graph.degree(far) > graph.degree(near));
        assert_eq!(select_variable(&grid, &graph, &domains, true), Some(far));
    }

    #[test]
    fn skips_assigned_variables() {
        let (mut grid, graph, domains) = setup();
        grid.assign(Cell::new(0, 0), 1);
        assert_eq!(
            select_variable(&grid, &graph, &domains, false),
            Some(Cell::new(0, 1))
        );
    }

    #[test]
    fn natural_order_without_lcv() {
        let (grid, graph, domains) = setup();
        let values = order_values(&grid, &graph, &domains, Cell::new(0, 0), false);
        assert_eq!(values, (1..=9).collect::<Vec<u8>>());
    }

    #[test]
    fn lcv_puts_least_conflicting_value_first() {
        let (grid, graph, mut domains) = setup();
        let cell = Cell::new(0, 0);
        // Make 7 scarce among the peers: every peer drops it.
        for &peer in graph.peers(cell) {
            domains.remove(peer, 7);
        }
        let values = order_values(&grid, &graph, &domains, cell, true);
        assert_eq!(values[0], 7);
        // Remaining ties keep natural order.
        assert_eq!(
            values[1..].to_vec(),
            (1..=9).filter(|&v| v != 7).collect::<Vec<u8>>()
        );
    }

    #[test]
    fn lcv_ignores_assigned_peers() {
        let (mut grid, graph, mut domains) = setup();
        let cell = Cell::new(0, 0);
        let peer = Cell::new(0, 1);
        grid.assign(peer, 9);
        // The assigned peer still nominally holds a wide domain, but it must
        // not count toward any candidate's conflicts.
        for &other in graph.peers(cell) {
            if other != peer {
                domains.remove(other, 3);
            }
        }
        let values = order_values(&grid, &graph, &domains, cell, true);
        assert_eq!(values[0], 3);
    }
}
