//! Piece sides and cell contents.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The two sides.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// Both sides in index order
    pub const ALL: [Side; 2] = [Side::White, Side::Black];

    /// The opposing side
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }

    /// Row a man of this side promotes on
    #[inline]
    #[must_use]
    pub(crate) const fn promotion_row(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 7,
        }
    }

    /// Forward row step for a man of this side
    #[inline]
    #[must_use]
    pub(crate) const fn forward(self) -> isize {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

/// Contents of one board cell.
///
/// The numeric codes mirror the snapshot format used at the board
/// interchange boundary: 0 empty, 1 White man, 2 Black man, 3 White king,
/// 4 Black king. Side is code parity (odd = White), king is code > 2.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Man(Side),
    King(Side),
}

impl Cell {
    /// Parse a cell from its snapshot code (0-4)
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Cell> {
        match code {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Man(Side::White)),
            2 => Some(Cell::Man(Side::Black)),
            3 => Some(Cell::King(Side::White)),
            4 => Some(Cell::King(Side::Black)),
            _ => None,
        }
    }

    /// Convert the cell to its snapshot code
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Man(Side::White) => 1,
            Cell::Man(Side::Black) => 2,
            Cell::King(Side::White) => 3,
            Cell::King(Side::Black) => 4,
        }
    }

    /// The side owning the piece, if any
    #[inline]
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Man(side) | Cell::King(side) => Some(side),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[inline]
    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self, Cell::King(_))
    }

    /// The cell after promotion; kings and empty cells are unchanged
    #[inline]
    #[must_use]
    pub(crate) const fn promoted(self) -> Cell {
        match self {
            Cell::Man(side) => Cell::King(side),
            other => other,
        }
    }

    /// Character used in board diagrams ('.', 'w', 'b', 'W', 'B')
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Man(Side::White) => 'w',
            Cell::Man(Side::Black) => 'b',
            Cell::King(Side::White) => 'W',
            Cell::King(Side::Black) => 'B',
        }
    }
}
