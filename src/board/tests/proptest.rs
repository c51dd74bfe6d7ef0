//! Property-based tests using proptest.

use proptest::prelude::*;

use crate::board::{Board, Cell, Engine, EngineConfig, Side, Square};

/// Strategy for one dark-square cell, biased toward empty cells and men so
/// random positions stay realistic.
fn cell_strategy() -> impl Strategy<Value = Cell> {
    prop_oneof![
        12 => Just(Cell::Empty),
        3 => Just(Cell::Man(Side::White)),
        3 => Just(Cell::Man(Side::Black)),
        1 => Just(Cell::King(Side::White)),
        1 => Just(Cell::King(Side::Black)),
    ]
}

/// Strategy for a random position with pieces on the 32 dark squares.
fn board_strategy() -> impl Strategy<Value = Board> {
    prop::collection::vec(cell_strategy(), 32).prop_map(|cells| {
        let mut board = Board::empty();
        let mut cells = cells.into_iter();
        for row in 0..8 {
            for col in 0..8 {
                let sq = Square(row, col);
                if sq.is_dark() {
                    board.set(sq, cells.next().unwrap());
                }
            }
        }
        board
    })
}

proptest! {
    /// Property: generated moves start on a piece of the queried side,
    /// land on an empty cell, and capture only opposing pieces.
    #[test]
    fn prop_side_moves_are_well_formed(board in board_strategy()) {
        for side in Side::ALL {
            let (moves, _) = board.side_moves(side);
            for mv in moves.iter() {
                prop_assert_eq!(board.get(mv.from).side(), Some(side));
                prop_assert!(board.get(mv.to).is_empty());
                prop_assert_ne!(mv.from, mv.to);
                if let Some(captured) = mv.captured {
                    prop_assert_eq!(board.get(captured).side(), Some(side.opponent()));
                }
            }
        }
    }

    /// Property: the mandatory-capture rule holds at side level - if any
    /// piece of the side can capture, every reported move is a capture.
    #[test]
    fn prop_mandatory_capture_filter(board in board_strategy()) {
        for side in Side::ALL {
            let (moves, forced) = board.side_moves(side);
            let any_piece_captures = (0..8).flat_map(|row| (0..8).map(move |col| Square(row, col)))
                .filter(|sq| board.get(*sq).side() == Some(side))
                .any(|sq| board.piece_moves(sq).1);
            prop_assert_eq!(forced, any_piece_captures);
            if forced {
                prop_assert!(!moves.is_empty());
                prop_assert!(moves.iter().all(|mv| mv.is_capture()));
            } else {
                prop_assert!(moves.iter().all(|mv| !mv.is_capture()));
            }
        }
    }

    /// Property: without captures the side-level list is exactly the
    /// concatenation of the per-piece lists in board-scan order.
    #[test]
    fn prop_side_moves_agree_with_piece_moves(board in board_strategy()) {
        for side in Side::ALL {
            let (moves, forced) = board.side_moves(side);
            if forced {
                continue;
            }
            let mut expected = Vec::new();
            for row in 0..8 {
                for col in 0..8 {
                    let sq = Square(row, col);
                    if board.get(sq).side() == Some(side) {
                        let (piece_moves, _) = board.piece_moves(sq);
                        expected.extend(piece_moves.iter().copied());
                    }
                }
            }
            prop_assert_eq!(moves.as_slice(), expected.as_slice());
        }
    }

    /// Property: applying a non-capture keeps both piece counts; applying
    /// a capture removes exactly one opposing piece.
    #[test]
    fn prop_apply_move_conserves_material(board in board_strategy()) {
        for side in Side::ALL {
            let (moves, _) = board.side_moves(side);
            for mv in moves.iter() {
                let next = board.apply_move(*mv);
                prop_assert_eq!(next.piece_count(side), board.piece_count(side));
                let expected = board.piece_count(side.opponent())
                    - usize::from(mv.is_capture());
                prop_assert_eq!(next.piece_count(side.opponent()), expected);
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Property: with the deterministic configuration, repeated searches
    /// over identical positions return identical sequences.
    #[test]
    fn prop_fixed_seed_search_is_deterministic(board in board_strategy()) {
        let config = EngineConfig::default().with_depths(2).with_deterministic(true);
        let mut first = Engine::new(config);
        let mut second = Engine::new(config);
        first.set_position(board.clone());
        second.set_position(board);
        for side in Side::ALL {
            prop_assert_eq!(
                first.find_best_sequence(side),
                second.find_best_sequence(side)
            );
        }
    }

    /// Property: pruning changes the visited node count only, never the
    /// selected sequence.
    #[test]
    fn prop_pruning_preserves_selection(board in board_strategy()) {
        let config = EngineConfig::default().with_depths(2).with_deterministic(true);
        let mut pruned = Engine::new(config);
        let mut unpruned = Engine::new(config.with_pruning(false));
        pruned.set_position(board.clone());
        unpruned.set_position(board);
        for side in Side::ALL {
            prop_assert_eq!(
                pruned.find_best_sequence(side),
                unpruned.find_best_sequence(side)
            );
            prop_assert!(pruned.last_stats().nodes <= unpruned.last_stats().nodes);
        }
    }

    /// Property: a returned multi-move sequence is always a capture chain
    /// whose moves connect landing square to next origin.
    #[test]
    fn prop_sequences_are_connected_capture_chains(board in board_strategy()) {
        let config = EngineConfig::default().with_depths(2).with_deterministic(true);
        let mut engine = Engine::new(config);
        engine.set_position(board.clone());
        for side in Side::ALL {
            let sequence = engine.find_best_sequence(side);
            if sequence.len() > 1 {
                prop_assert!(sequence.iter().all(|mv| mv.is_capture()));
                for pair in sequence.windows(2) {
                    prop_assert_eq!(pair[0].to, pair[1].from);
                }
            }
            let mut replay = board.clone();
            for mv in sequence {
                replay = replay.apply_move(mv);
            }
        }
    }
}
