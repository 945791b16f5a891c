//! Per-variable candidate value sets.
//!
//! Domains live in persistent (`im`) collections: taking the snapshot the
//! search needs before a tentative assignment is a cheap structural clone,
//! and restoring it on backtrack is a plain move.

use im::OrdSet;

use crate::grid::{Cell, Grid};

/// An ordered candidate set; iteration yields values in ascending order.
pub type Domain = OrdSet<u8>;

/// The domains of every variable in the session.
#[derive(Debug, Clone)]
pub struct DomainStore {
    domains: im::HashMap<Cell, Domain>,
}

impl DomainStore {
    /// Initial domains for every cell unassigned in `grid`: `{1..9}` minus
    /// every value already fixed among the cell's coordinate peers. This
    /// one-shot pre-filter is independent of (and cheaper than) AC-3.
    pub fn initial(grid: &Grid) -> Self {
        let domains = grid
            .unassigned_cells()
            .into_iter()
            .map(|cell| {
                let domain: Domain = (1..=9)
                    .filter(|&value| grid.is_consistent(cell, value))
                    .collect();
                (cell, domain)
            })
            .collect();
        Self { domains }
    }

    pub fn domain(&self, cell: Cell) -> &Domain {
        // Every variable gets a domain at construction and is never removed.
        self.domains.get(&cell).unwrap()
    }

    pub fn len(&self, cell: Cell) -> usize {
        self.domain(cell).len()
    }

    pub fn is_empty(&self, cell: Cell) -> bool {
        self.domain(cell).is_empty()
    }

    pub fn contains(&self, cell: Cell, value: u8) -> bool {
        self.domain(cell).contains(&value)
    }

    /// The forced value, if the domain has shrunk to exactly one candidate.
    pub fn singleton(&self, cell: Cell) -> Option<u8> {
        let domain = self.domain(cell);
        if domain.len() == 1 {
            domain.get_min().copied()
        } else {
            None
        }
    }

    /// Candidate values in ascending order.
    pub fn values(&self, cell: Cell) -> impl Iterator<Item = u8> + '_ {
        self.domain(cell).iter().copied()
    }

    /// Removes `value` from the cell's domain; true if it was present.
    pub fn remove(&mut self, cell: Cell, value: u8) -> bool {
        self.domains
            .get_mut(&cell)
            .map(|domain| domain.remove(&value).is_some())
            .unwrap_or(false)
    }

    /// Collapses the cell's domain to the single assigned value.
    pub fn collapse(&mut self, cell: Cell, value: u8) {
        self.domains.insert(cell, Domain::unit(value));
    }

    /// A full copy of every current domain, to be restored verbatim on
    /// backtrack. O(1) thanks to structural sharing.
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    pub fn restore(&mut self, snapshot: Self) {
        *self = snapshot;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::grid::{testing::board_from_rows, Cell, Grid};

    #[test]
    fn empty_grid_has_full_domains() {
        let store = DomainStore::initial(&Grid::empty());
        let all: Vec<u8> = (1..=9).collect();
        assert_eq!(
            store.values(Cell::new(0, 0)).collect::<Vec<_>>(),
            all,
            "values iterate in ascending order"
        );
    }

    #[test]
    fn prefilter_removes_fixed_peer_values() {
        let mut rows = [[0u8; 9]; 9];
        rows[0] = [0, 2, 3, 4, 5, 6, 7, 8, 9];
        let grid = Grid::new(board_from_rows(rows)).unwrap();
        let store = DomainStore::initial(&grid);

        // (0, 0) sees 2..9 in its row; only 1 survives.
        assert_eq!(store.singleton(Cell::new(0, 0)), Some(1));
        // (1, 0) shares a box with 2 and 3 and a column with nothing.
        let d10: Vec<u8> = store.values(Cell::new(1, 0)).collect();
        assert_eq!(d10, vec![1, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn snapshot_restores_verbatim() {
        let store = DomainStore::initial(&Grid::empty());
        let mut working = store.clone();
        let snapshot = working.snapshot();

        let cell = Cell::new(3, 3);
        assert!(working.remove(cell, 5));
        working.collapse(Cell::new(0, 0), 9);
        assert_eq!(working.len(cell), 8);

        working.restore(snapshot);
        assert_eq!(working.len(cell), 9);
        assert_eq!(working.len(Cell::new(0, 0)), 9);
    }

    #[test]
    fn remove_reports_presence() {
        let mut store = DomainStore::initial(&Grid::empty());
        let cell = Cell::new(2, 7);
        assert!(store.remove(cell, 4));
        assert!(!store.remove(cell, 4));
        assert!(!store.contains(cell, 4));
        assert_eq!(store.len(cell), 8);
    }
}
