pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors surfaced to callers of the crate.
///
/// A search that exhausts every branch without finding a solution is *not*
/// an error: it is reported through [`crate::solver::SolveReport`]. Likewise,
/// a domain wipe-out during propagation is internal control flow consumed by
/// the search and never escapes here.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input board already violates the row/column/box distinctness
    /// rule. Raised once, at construction; the solving session is aborted.
    #[error("input board violates the row/column/box distinctness rule")]
    InvalidBoard,

    #[error("expected 9 board rows, found {0}")]
    BadRowCount(usize),

    #[error("board row {row} has {len} cells, expected 9")]
    BadRowLength { row: usize, len: usize },

    #[error("unexpected character {ch:?} in board row {row}")]
    BadCharacter { row: usize, ch: char },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}
