//! Core draughts types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Side` and `Cell` - piece ownership and cell contents
//! - `Square` - board coordinates as (row, col)
//! - `Move` and `MoveList` - move representation

mod cell;
mod moves;
mod square;

pub use cell::{Cell, Side};
pub use moves::{Move, MoveList};
pub use square::Square;
