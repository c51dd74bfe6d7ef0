//! Draughts board representation and game-tree search.
//!
//! The board is a plain 8x8 grid of cells; move generation enforces
//! mandatory-capture rules and the search selects the move (or forced
//! capture chain) a side should play.
//!
//! # Example
//! ```
//! use draughts_engine::board::{Board, Side};
//!
//! let board = Board::new();
//! let (moves, forced) = board.side_moves(Side::White);
//! assert_eq!(moves.len(), 7);
//! assert!(!forced);
//! ```

mod builder;
mod error;
mod eval;
mod movegen;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::CellCodeError;
pub use eval::{ScoringMode, SCORE_INF};
pub use state::Board;
pub use types::{Cell, Move, MoveList, Side, Square};

// Public API - the search engine and its configuration
pub use search::{Engine, EngineConfig, SearchStats};
