//! Draughts (checkers) move generation and game-tree search.
//!
//! The engine enumerates legal moves under mandatory-capture rules,
//! including chained multi-jumps and long-range sliding kings, scores
//! positions with a material-ratio heuristic, and runs a depth-bounded
//! minimax search with alpha-beta pruning to pick the move - or the whole
//! forced capture sequence - a side should play.
//!
//! # Example
//! ```
//! use draughts_engine::{Engine, EngineConfig, Side};
//!
//! let mut engine = Engine::new(EngineConfig::default().with_deterministic(true));
//! let sequence = engine.find_best_sequence(Side::White);
//! assert_eq!(sequence.len(), 1); // no captures available at the start
//! for mv in sequence {
//!     engine.apply(mv);
//! }
//! ```

pub mod board;

pub use board::{
    Board, BoardBuilder, Cell, CellCodeError, Engine, EngineConfig, Move, MoveList, ScoringMode,
    SearchStats, Side, Square, SCORE_INF,
};
