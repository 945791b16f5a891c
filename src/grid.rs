//! The 9x9 cell matrix and the Sudoku distinctness invariant.
//!
//! [`Grid`] owns the mutable board the search operates on together with an
//! immutable snapshot of the original input, kept for reporting. Assignment
//! consistency is checked through [`Grid::is_consistent`]; the mutation
//! methods themselves are unchecked because the search hot path has already
//! performed the check.

use std::fmt;

use crate::error::{Error, Result};

/// A 9x9 matrix of optional digits 1-9; `None` marks a blank cell.
pub type Board = [[Option<u8>; 9]; 9];

/// Coordinate of a single cell, row-major ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < 9 && col < 9);
        Self { row, col }
    }

    /// The 20 other cells sharing this cell's row, column, or 3x3 box.
    ///
    /// Computed from coordinate arithmetic alone, so the result is the same
    /// whether the peers are blank or already assigned.
    pub fn peers(self) -> Vec<Cell> {
        let mut peers = Vec::with_capacity(20);
        for i in 0..9 {
            if i != self.col {
                peers.push(Cell::new(self.row, i));
            }
            if i != self.row {
                peers.push(Cell::new(i, self.col));
            }
        }
        // Box origin is (row / 3 * 3, col / 3 * 3). Box cells sharing the
        // row or column are already covered by the scans above.
        let (br, bc) = (self.row / 3 * 3, self.col / 3 * 3);
        for r in br..br + 3 {
            for c in bc..bc + 3 {
                if r != self.row && c != self.col {
                    peers.push(Cell::new(r, c));
                }
            }
        }
        peers
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The 27 houses of the grid: 9 rows, 9 columns, 9 boxes.
pub fn houses() -> impl Iterator<Item = [Cell; 9]> {
    let mut houses = Vec::with_capacity(27);
    for r in 0..9 {
        houses.push(std::array::from_fn(|c| Cell::new(r, c)));
    }
    for c in 0..9 {
        houses.push(std::array::from_fn(|r| Cell::new(r, c)));
    }
    for br in (0..9).step_by(3) {
        for bc in (0..9).step_by(3) {
            houses.push(std::array::from_fn(|i| Cell::new(br + i / 3, bc + i % 3)));
        }
    }
    houses.into_iter()
}

/// The board under mutation plus the untouched original input.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Board,
    original: Board,
}

impl Grid {
    /// Validates the input and builds a grid around it.
    ///
    /// Fails with [`Error::InvalidBoard`] if two equal digits share a house.
    pub fn new(board: Board) -> Result<Self> {
        let grid = Self {
            cells: board,
            original: board,
        };
        if !grid.validate() {
            return Err(Error::InvalidBoard);
        }
        Ok(grid)
    }

    /// A grid with all 81 cells blank. Trivially valid.
    pub fn empty() -> Self {
        Self {
            cells: [[None; 9]; 9],
            original: [[None; 9]; 9],
        }
    }

    pub fn value(&self, cell: Cell) -> Option<u8> {
        self.cells[cell.row][cell.col]
    }

    pub fn board(&self) -> &Board {
        &self.cells
    }

    /// The input board as it was at construction; never mutated.
    pub fn original(&self) -> &Board {
        &self.original
    }

    /// True iff every house holds pairwise distinct assigned values.
    pub fn validate(&self) -> bool {
        houses().all(|house| {
            let mut seen = [false; 10];
            house.iter().all(|&cell| match self.value(cell) {
                Some(v) => !std::mem::replace(&mut seen[v as usize], true),
                None => true,
            })
        })
    }

    /// True iff placing `value` at `cell` violates no constraint against the
    /// currently assigned cells. The cell under test is excluded from the
    /// comparison, so re-testing an assigned cell against its own value
    /// succeeds.
    pub fn is_consistent(&self, cell: Cell, value: u8) -> bool {
        cell.peers()
            .into_iter()
            .all(|peer| self.value(peer) != Some(value))
    }

    /// Unchecked assignment. Callers must have verified [`Self::is_consistent`].
    pub fn assign(&mut self, cell: Cell, value: u8) {
        debug_assert!((1..=9).contains(&value));
        self.cells[cell.row][cell.col] = Some(value);
    }

    /// Unchecked removal of an assignment.
    pub fn unassign(&mut self, cell: Cell) {
        self.cells[cell.row][cell.col] = None;
    }

    /// The first blank cell in row-major order, if any. Used by the
    /// ordering-free searches.
    pub fn first_unassigned(&self) -> Option<Cell> {
        for row in 0..9 {
            for col in 0..9 {
                if self.cells[row][col].is_none() {
                    return Some(Cell::new(row, col));
                }
            }
        }
        None
    }

    /// All blank cells in row-major order.
    pub fn unassigned_cells(&self) -> Vec<Cell> {
        let mut cells = Vec::new();
        for row in 0..9 {
            for col in 0..9 {
                if self.cells[row][col].is_none() {
                    cells.push(Cell::new(row, col));
                }
            }
        }
        cells
    }

    pub fn is_complete(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_some()))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(&self.cells))
    }
}

/// Renders a board with `-`/`|`/`+` separators every three rows and columns
/// and blank cells as two spaces.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for (r, row) in board.iter().enumerate() {
        if r % 3 == 0 && r != 0 {
            out.push_str("------+-------+------\n");
        }
        for (c, cell) in row.iter().enumerate() {
            if c % 3 == 0 && c != 0 {
                out.push_str("| ");
            }
            match cell {
                Some(v) => {
                    out.push((b'0' + v) as char);
                    out.push(' ');
                }
                None => out.push_str("  "),
            }
        }
        out.push('\n');
    }
    out
}
