use std::fmt;

use crate::error::{ChessError, ChessResult};

pub const BOARD_SIZE: i8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8, // 0-7, White's back rank is 0
    col: u8, // 0-7
}

impl Square {
    pub fn at(row: i8, col: i8) -> ChessResult<Self> {
        if Self::on_board(row, col) {
            Ok(Self { row: row as u8, col: col as u8 })
        } else {
            Err(ChessError::OutOfBounds { row, col })
        }
    }

    pub fn row(&self) -> i8 {
        self.row as i8
    }

    pub fn col(&self) -> i8 {
        self.col as i8
    }

    /// The square `(d_row, d_col)` away from this one, or `None` past the edge.
    pub fn offset(&self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row().checked_add(d_row)?;
        let col = self.col().checked_add(d_col)?;
        Self::at(row, col).ok()
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| {
            (0..BOARD_SIZE).map(move |col| Square {
                row: row as u8,
                col: col as u8,
            })
        })
    }

    fn on_board(row: i8, col: i8) -> bool {
        (0..BOARD_SIZE).contains(&row) && (0..BOARD_SIZE).contains(&col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
