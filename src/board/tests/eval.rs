//! Static evaluation tests.

use crate::board::{Board, BoardBuilder, ScoringMode, Side, Square, SCORE_INF};

#[test]
fn equal_material_scores_one() {
    let board = Board::new();
    assert_eq!(board.score(Side::White, ScoringMode::Material), 1.0);
    assert_eq!(board.score(Side::Black, ScoringMode::Material), 1.0);
}

#[test]
fn losing_side_scores_infinite() {
    let board = BoardBuilder::new()
        .man(Square(3, 2), Side::Black)
        .man(Square(4, 5), Side::Black)
        .build();
    assert_eq!(board.score(Side::White, ScoringMode::Material), SCORE_INF);
    assert_eq!(board.score(Side::Black, ScoringMode::Material), 0.0);
}

#[test]
fn empty_board_counts_as_loss_for_perspective() {
    let board = Board::empty();
    assert_eq!(board.score(Side::White, ScoringMode::Material), SCORE_INF);
    assert_eq!(board.score(Side::Black, ScoringMode::Material), SCORE_INF);
}

#[test]
fn material_ratio_is_opponent_over_perspective() {
    let board = BoardBuilder::new()
        .man(Square(5, 2), Side::White)
        .man(Square(2, 1), Side::Black)
        .man(Square(2, 5), Side::Black)
        .build();
    assert_eq!(board.score(Side::White, ScoringMode::Material), 2.0);
    assert_eq!(board.score(Side::Black, ScoringMode::Material), 0.5);
}

#[test]
fn king_weighs_four_men() {
    let board = BoardBuilder::new()
        .man(Square(5, 2), Side::White)
        .king(Square(2, 1), Side::Black)
        .build();
    assert_eq!(board.score(Side::White, ScoringMode::Material), 4.0);
    assert_eq!(board.score(Side::Black, ScoringMode::Material), 0.25);
}

#[test]
fn king_weighs_five_men_with_advance_bonus() {
    // The White man sits on its starting back rank so it gets no bonus
    let board = BoardBuilder::new()
        .man(Square(7, 2), Side::White)
        .king(Square(2, 1), Side::Black)
        .build();
    assert_eq!(
        board.score(Side::White, ScoringMode::MaterialAndAdvance),
        5.0
    );
}

#[test]
fn advance_bonus_rewards_progress() {
    // Both men are one piece, but the White man is 5 rows advanced while
    // the Black man has not moved
    let board = BoardBuilder::new()
        .man(Square(2, 3), Side::White)
        .man(Square(0, 1), Side::Black)
        .build();
    let score = board.score(Side::White, ScoringMode::MaterialAndAdvance);
    assert!((score - 1.0 / 1.25).abs() < 1e-12);
    // kings collect no advance bonus
    let board = BoardBuilder::new()
        .king(Square(2, 3), Side::White)
        .king(Square(0, 1), Side::Black)
        .build();
    assert_eq!(board.score(Side::White, ScoringMode::MaterialAndAdvance), 1.0);
}

#[test]
fn score_is_scale_consistent() {
    let single = BoardBuilder::new()
        .man(Square(4, 3), Side::White)
        .man(Square(1, 2), Side::Black)
        .man(Square(1, 6), Side::Black)
        .build();
    let doubled = BoardBuilder::new()
        .man(Square(4, 3), Side::White)
        .man(Square(4, 7), Side::White)
        .man(Square(1, 2), Side::Black)
        .man(Square(1, 6), Side::Black)
        .man(Square(3, 2), Side::Black)
        .man(Square(3, 6), Side::Black)
        .build();
    assert_eq!(
        single.score(Side::White, ScoringMode::Material),
        doubled.score(Side::White, ScoringMode::Material)
    );
}
