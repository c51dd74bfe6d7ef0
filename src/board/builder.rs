//! Fluent builder for constructing draughts positions.
//!
//! Allows creating positions piece by piece rather than editing cell
//! matrices by hand.
//!
//! # Example
//! ```
//! use draughts_engine::board::{BoardBuilder, Cell, Side, Square};
//!
//! let board = BoardBuilder::new()
//!     .man(Square(2, 3), Side::White)
//!     .man(Square(3, 4), Side::Black)
//!     .build();
//! assert_eq!(board.get(Square(2, 3)), Cell::Man(Side::White));
//! ```

use super::{Board, Cell, Side, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Cell)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Place a man on the board.
    #[must_use]
    pub fn man(self, square: Square, side: Side) -> Self {
        self.cell(square, Cell::Man(side))
    }

    /// Place a king on the board.
    #[must_use]
    pub fn king(self, square: Square, side: Side) -> Self {
        self.cell(square, Cell::King(side))
    }

    /// Place an arbitrary cell value, replacing anything already there.
    #[must_use]
    pub fn cell(mut self, square: Square, cell: Cell) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, cell));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Build the final `Board`.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (square, cell) in self.pieces {
            board.set(square, cell);
        }
        board
    }
}
