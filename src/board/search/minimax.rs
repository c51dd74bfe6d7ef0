//! Evaluation layer: scalar minimax with alpha-beta pruning.

use super::super::SCORE_INF;
use super::root::SearchContext;
use super::{Board, Side, Square};

impl SearchContext<'_> {
    /// Depth-bounded minimax over owned board copies.
    ///
    /// Depth counts full turns from the root's reply: even depths belong
    /// to the root side's opponent and minimize, odd depths to the root
    /// side and maximize. A capture keeps the same side and depth via
    /// `chain`, so a whole capture chain costs one ply; leaves are scored
    /// from the opponent's perspective, making high scores good for the
    /// root side.
    pub(crate) fn evaluate(
        &mut self,
        board: Board,
        side: Side,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        chain: Option<Square>,
    ) -> f64 {
        self.nodes += 1;
        if depth == self.max_depth {
            return board.score(self.root_side.opponent(), self.scoring);
        }

        let (moves, forced) = match chain {
            Some(sq) => board.piece_moves(sq),
            None => board.side_moves(side),
        };
        if chain.is_some() && !forced {
            // Chain exhausted: the turn passes.
            return self.evaluate(board, side.opponent(), depth + 1, alpha, beta, None);
        }

        let maximizing = depth % 2 == 1;
        if moves.is_empty() {
            // Side to move has no legal move and loses immediately.
            return if maximizing { 0.0 } else { SCORE_INF };
        }

        let mut min_score = SCORE_INF + 1.0;
        let mut max_score: f64 = -1.0;
        for &mv in moves.as_slice() {
            let next_board = board.apply_move(mv);
            let score = if forced {
                self.evaluate(next_board, side, depth, alpha, beta, Some(mv.to))
            } else {
                self.evaluate(next_board, side.opponent(), depth + 1, alpha, beta, None)
            };
            min_score = min_score.min(score);
            max_score = max_score.max(score);
            if maximizing {
                alpha = alpha.max(max_score);
            } else {
                beta = beta.min(min_score);
            }
            if self.pruning && alpha >= beta {
                break;
            }
        }
        if maximizing {
            max_score
        } else {
            min_score
        }
    }
}
