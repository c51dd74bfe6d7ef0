//! Board state and move application.

use std::fmt;

use super::error::CellCodeError;
use super::{Cell, Move, Side, Square};

/// An 8x8 draughts position.
///
/// The board is a plain grid of cells passed around by value: the search
/// never mutates a caller's board, it works on owned copies produced by
/// [`Board::apply_move`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; 8]; 8],
}

impl Board {
    /// Create the standard starting position: men on dark squares,
    /// Black on rows 0-2, White on rows 5-7.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for row in 0..8 {
            for col in 0..8 {
                let sq = Square(row, col);
                if !sq.is_dark() {
                    continue;
                }
                if row < 3 {
                    board.set(sq, Cell::Man(Side::Black));
                } else if row > 4 {
                    board.set(sq, Cell::Man(Side::White));
                }
            }
        }
        board
    }

    /// Create an empty board
    #[must_use]
    pub fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; 8]; 8],
        }
    }

    /// Get the cell at a square
    #[inline]
    #[must_use]
    pub fn get(&self, sq: Square) -> Cell {
        self.cells[sq.row()][sq.col()]
    }

    /// Set the cell at a square
    #[inline]
    pub fn set(&mut self, sq: Square, cell: Cell) {
        self.cells[sq.row()][sq.col()] = cell;
    }

    /// Build a board from an 8x8 matrix of snapshot codes (0-4)
    pub fn from_codes(codes: &[[u8; 8]; 8]) -> Result<Board, CellCodeError> {
        let mut board = Board::empty();
        for (row, row_codes) in codes.iter().enumerate() {
            for (col, &code) in row_codes.iter().enumerate() {
                let cell = Cell::from_code(code)
                    .ok_or(CellCodeError::InvalidCode { code, row, col })?;
                board.cells[row][col] = cell;
            }
        }
        Ok(board)
    }

    /// Convert the board to an 8x8 matrix of snapshot codes
    #[must_use]
    pub fn to_codes(&self) -> [[u8; 8]; 8] {
        let mut codes = [[0u8; 8]; 8];
        for row in 0..8 {
            for col in 0..8 {
                codes[row][col] = self.cells[row][col].code();
            }
        }
        codes
    }

    /// Apply a move, returning the resulting position.
    ///
    /// Removes the captured piece (if any), promotes a man whose
    /// destination is its promotion row, then relocates the piece.
    /// Promotion is resolved before relocation, so a capture landing on
    /// the back row continues any further chain with king capture rules.
    ///
    /// # Panics
    ///
    /// Moving from an empty cell or onto an occupied cell is an internal
    /// invariant violation and panics; move generation never produces
    /// such moves.
    #[must_use]
    pub fn apply_move(&self, mv: Move) -> Board {
        let mut next = self.clone();
        if let Some(captured) = mv.captured {
            next.set(captured, Cell::Empty);
        }
        let piece = next.get(mv.from);
        assert!(!piece.is_empty(), "move {mv} starts on an empty cell");
        assert!(
            next.get(mv.to).is_empty(),
            "move {mv} lands on an occupied cell"
        );
        let piece = match piece.side() {
            Some(side) if !piece.is_king() && mv.to.row() == side.promotion_row() => {
                piece.promoted()
            }
            _ => piece,
        };
        next.set(mv.to, piece);
        next.set(mv.from, Cell::Empty);
        next
    }

    /// Count pieces of a side (men and kings)
    #[must_use]
    pub fn piece_count(&self, side: Side) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.side() == Some(side))
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    /// ASCII diagram with rank 8 (row 0) at the top
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for cell in cells {
                write!(f, " {}", cell.to_char())?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
