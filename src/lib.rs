//! Novem solves classic 9x9 Sudoku by backtracking search strengthened with
//! constraint propagation.
//!
//! Each blank cell becomes a variable with a domain of candidate digits,
//! constrained pairwise against the 20 peers sharing its row, column, or
//! 3x3 box. The [`solver::CspSolver`] prunes domains to arc consistency with
//! AC-3 and then searches depth-first, optionally selecting variables by
//! minimum remaining values (MRV), ordering candidates least-constraining
//! first (LCV), and re-running AC-3 after every tentative assignment.
//! [`solver::NaiveSolver`] is the brute-force baseline the engine is
//! measured against.
//!
//! # Example
//!
//! ```
//! use novem::loader::parse_board;
//! use novem::solver::{CspSolver, SearchConfig};
//!
//! let board = parse_board(
//!     "530070000\n\
//!      600195000\n\
//!      098000060\n\
//!      800060003\n\
//!      400803001\n\
//!      700020006\n\
//!      060000280\n\
//!      000419005\n\
//!      000080079",
//! )?;
//!
//! let report = CspSolver::new(board, SearchConfig::full())?.solve();
//! assert!(report.solution.is_some());
//! println!("{}", report.summary());
//! # Ok::<(), novem::error::Error>(())
//! ```

pub mod error;
pub mod generator;
pub mod grid;
pub mod loader;
pub mod solver;

pub use error::{Error, Result};
