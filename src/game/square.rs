use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A cell on the 8x8 grid. Row 0 is Black's back rank (rank 8), row 7 is
/// White's (rank 1); column 0 is the a-file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Returns `None` when either coordinate is off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub fn row(self) -> usize {
        self.row as usize
    }

    pub fn col(self) -> usize {
        self.col as usize
    }

    /// The square `dr` rows and `dc` columns away, if it is on the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// All 64 squares, row by row from the top.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }

    /// Light squares are the ones where `row + col` is even.
    pub fn is_light(self) -> bool {
        (self.row + self.col) % 2 == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSquareError {
    #[error("expected a square like \"e2\", got {0:?}")]
    InvalidLength(String),
    #[error("invalid file {0:?}, expected a-h")]
    InvalidFile(char),
    #[error("invalid rank {0:?}, expected 1-8")]
    InvalidRank(char),
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file.to_ascii_lowercase(), rank),
            _ => return Err(ParseSquareError::InvalidLength(s.to_string())),
        };
        if !('a'..='h').contains(&file) {
            return Err(ParseSquareError::InvalidFile(file));
        }
        if !('1'..='8').contains(&rank) {
            return Err(ParseSquareError::InvalidRank(rank));
        }
        let col = file as u8 - b'a';
        let row = b'8' - rank as u8;
        Ok(Square { row, col })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, 8 - self.row)
    }
}
