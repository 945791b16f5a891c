//! The binary not-equal constraint graph over unassigned cells.
//!
//! Built once per solving session from coordinate arithmetic, so the graph
//! is static even as domains shrink and cells are tentatively assigned.

use std::collections::HashMap;

use crate::grid::{Cell, Grid};

#[derive(Debug, Clone)]
pub struct ConstraintGraph {
    /// Unassigned cells in row-major order; the fixed enumeration order used
    /// when MRV is disabled.
    variables: Vec<Cell>,
    /// For each variable, its unassigned peers, sorted for deterministic
    /// iteration.
    peers: HashMap<Cell, Vec<Cell>>,
}

impl ConstraintGraph {
    /// Builds the graph for every cell unassigned in `grid`.
    pub fn build(grid: &Grid) -> Self {
        let variables = grid.unassigned_cells();
        let peers = variables
            .iter()
            .map(|&cell| {
                let mut peer_vars: Vec<Cell> = cell
                    .peers()
                    .into_iter()
                    .filter(|&peer| grid.value(peer).is_none())
                    .collect();
                peer_vars.sort();
                (cell, peer_vars)
            })
            .collect();
        Self { variables, peers }
    }

    pub fn variables(&self) -> &[Cell] {
        &self.variables
    }

    /// The variable peers of `cell`. Cells outside the variable set have no
    /// entry and yield an empty slice.
    pub fn peers(&self, cell: Cell) -> &[Cell] {
        self.peers.get(&cell).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Degree of a variable: how many other variables it constrains.
    pub fn degree(&self, cell: Cell) -> usize {
        self.peers(cell).len()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::grid::{Cell, Grid};

    #[test]
    fn empty_grid_has_full_degree() {
        let graph = ConstraintGraph::build(&Grid::empty());
        assert_eq!(graph.variables().len(), 81);
        for &cell in graph.variables() {
            assert_eq!(graph.degree(cell), 20);
        }
    }

    #[test]
    fn assigned_cells_are_excluded() {
        let mut board = [[None; 9]; 9];
        board[0][1] = Some(3);
        let grid = Grid::new(board).unwrap();
        let graph = ConstraintGraph::build(&grid);

        assert_eq!(graph.variables().len(), 80);
        assert!(!graph.variables().contains(&Cell::new(0, 1)));
        // (0, 0) lost its peer (0, 1) but keeps the other 19.
        assert_eq!(graph.degree(Cell::new(0, 0)), 19);
        // A far-away cell is untouched.
        assert_eq!(graph.degree(Cell::new(8, 8)), 20);
    }

    #[test]
    fn peer_lists_are_sorted_and_symmetric() {
        let graph = ConstraintGraph::build(&Grid::empty());
        let cell = Cell::new(4, 4);
        let peers = graph.peers(cell);
        assert!(peers.windows(2).all(|w| w[0] < w[1]));
        for &peer in peers {
            assert!(graph.peers(peer).contains(&cell));
        }
    }
}
