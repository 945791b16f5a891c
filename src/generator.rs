//! Random puzzle generation.
//!
//! A complete grid is filled by randomized backtracking, then a share of the
//! cells proportional to the requested difficulty is blanked out. Boards
//! produced here always pass [`Grid`] validation at intake, since they are
//! carved out of a valid solved grid.

use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::grid::{Board, Grid};

/// Generates a puzzle with `round(81 * difficulty)` blank cells.
///
/// `difficulty` is clamped to `0.0..=1.0`. Note that high difficulties can
/// yield puzzles with more than one solution; the solver does not require
/// uniqueness.
pub fn generate(difficulty: f64, rng: &mut impl Rng) -> Board {
    let mut grid = Grid::empty();
    // An empty grid always admits a completion, so this cannot fail.
    fill(&mut grid, rng);
    debug_assert!(grid.is_complete() && grid.validate());

    let mut board = *grid.board();
    let holes = (81.0 * difficulty.clamp(0.0, 1.0)).round() as usize;
    for index in rand::seq::index::sample(rng, 81, holes).iter() {
        board[index / 9][index % 9] = None;
    }
    debug!(holes, "generated puzzle");
    board
}

/// [`generate`] with a reproducible ChaCha stream for the given seed.
pub fn generate_seeded(difficulty: f64, seed: u64) -> Board {
    generate(difficulty, &mut ChaCha8Rng::seed_from_u64(seed))
}

/// Depth-first fill of the remaining blanks, trying candidate digits in a
/// random order so repeated calls produce different grids.
fn fill(grid: &mut Grid, rng: &mut impl Rng) -> bool {
    let Some(cell) = grid.first_unassigned() else {
        return true;
    };
    let mut values: Vec<u8> = (1..=9).collect();
    values.shuffle(rng);
    for value in values {
        if grid.is_consistent(cell, value) {
            grid.assign(cell, value);
            if fill(grid, rng) {
                return true;
            }
            grid.unassign(cell);
        }
    }
    false
}
