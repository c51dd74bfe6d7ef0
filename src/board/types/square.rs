//! Board squares.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A square on the 8x8 board, represented as (row, col).
///
/// Row 0 is Black's back rank; White men move toward row 0 and promote
/// there, Black men toward row 7. Playable (dark) squares are those where
/// `row + col` is odd.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (row, col)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square(row, col))
        } else {
            None
        }
    }

    /// Get the row (0-7, where 0 = Black's back rank)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    /// Get the column (0-7)
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// Returns true for the dark squares draughts is played on
    #[inline]
    #[must_use]
    pub const fn is_dark(self) -> bool {
        (self.0 + self.1) % 2 == 1
    }

    /// Step by a (row, col) offset, returning `None` off the board
    #[inline]
    #[must_use]
    pub(crate) fn offset(self, d_row: isize, d_col: isize) -> Option<Square> {
        let row = self.0 as isize + d_row;
        let col = self.1 as isize + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square(row as usize, col as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    /// Formats as file letter plus rank digit, rank 8 at row 0 (e.g. "b6")
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.1 as u8) as char;
        write!(f, "{}{}", file, 8 - self.0)
    }
}
