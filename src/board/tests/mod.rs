//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `state.rs` - snapshot conversion, move application, promotion
//! - `movegen.rs` - legal move generation and mandatory capture
//! - `eval.rs` - static evaluation
//! - `search.rs` - decision layer, chains, determinism, pruning
//! - `proptest.rs` - property-based tests

mod eval;
mod proptest;
