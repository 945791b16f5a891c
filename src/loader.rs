//! Text representation of a board: nine lines of nine digit characters,
//! where `0` denotes a blank cell and `1`-`9` a fixed value.

use std::path::Path;

use crate::{
    error::{Error, Result},
    grid::Board,
};

/// Parses the 9-line board format. Blank lines and surrounding whitespace
/// are ignored; anything else malformed is a loader error, reported before
/// the board ever reaches validation.
pub fn parse_board(text: &str) -> Result<Board> {
    let rows: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if rows.len() != 9 {
        return Err(Error::BadRowCount(rows.len()));
    }

    let mut board: Board = [[None; 9]; 9];
    for (r, line) in rows.iter().enumerate() {
        let chars: Vec<char> = line.chars().collect();
        if chars.len() != 9 {
            return Err(Error::BadRowLength {
                row: r,
                len: chars.len(),
            });
        }
        for (c, ch) in chars.into_iter().enumerate() {
            board[r][c] = match ch {
                '0' => None,
                '1'..='9' => Some(ch as u8 - b'0'),
                _ => return Err(Error::BadCharacter { row: r, ch }),
            };
        }
    }
    Ok(board)
}

/// Reads and parses a board file.
pub fn load_board(path: &Path) -> Result<Board> {
    parse_board(&std::fs::read_to_string(path)?)
}
