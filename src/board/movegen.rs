//! Legal move generation under mandatory-capture rules.
//!
//! Generation is a pure function of the position; the tie-breaking shuffle
//! applied to side-level results lives in the engine, which owns the RNG.

use super::{Board, Move, MoveList, Side, Square};

/// The four diagonal directions as (row, col) steps.
const DIAGONALS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

impl Board {
    /// Legal moves for the piece on `sq`.
    ///
    /// Returns the move list and a flag that is true when the moves are
    /// captures. Captures take priority: a piece with at least one jump
    /// reports only jumps. Men jump in all four diagonal directions;
    /// plain man steps are forward only. An empty square yields an empty
    /// list.
    #[must_use]
    pub fn piece_moves(&self, sq: Square) -> (MoveList, bool) {
        let cell = self.get(sq);
        let Some(side) = cell.side() else {
            return (MoveList::new(), false);
        };

        let mut moves = MoveList::new();
        if cell.is_king() {
            self.king_captures(sq, side, &mut moves);
        } else {
            self.man_captures(sq, side, &mut moves);
        }
        if !moves.is_empty() {
            return (moves, true);
        }

        if cell.is_king() {
            self.king_steps(sq, &mut moves);
        } else {
            self.man_steps(sq, side, &mut moves);
        }
        (moves, false)
    }

    /// Legal moves for every piece of `side`, in row-major board order.
    ///
    /// Mandatory capture applies at side level: as soon as any piece can
    /// capture, plain moves of the whole side are discarded and only
    /// capturing moves qualify. An empty list with a false flag means the
    /// side has no legal move (a terminal loss, not an error).
    #[must_use]
    pub fn side_moves(&self, side: Side) -> (MoveList, bool) {
        let mut all = MoveList::new();
        let mut forced = false;
        for row in 0..8 {
            for col in 0..8 {
                let sq = Square(row, col);
                if self.get(sq).side() != Some(side) {
                    continue;
                }
                let (mut moves, captures) = self.piece_moves(sq);
                if captures && !forced {
                    forced = true;
                    all.clear();
                }
                if captures || !forced {
                    all.append(&mut moves);
                }
            }
        }
        (all, forced)
    }

    /// Man jumps: two steps over an adjacent opposing piece onto an empty
    /// landing square, in any diagonal direction.
    fn man_captures(&self, sq: Square, side: Side, moves: &mut MoveList) {
        for (d_row, d_col) in DIAGONALS {
            let Some(over) = sq.offset(d_row, d_col) else {
                continue;
            };
            let Some(to) = sq.offset(2 * d_row, 2 * d_col) else {
                continue;
            };
            if self.get(to).is_empty() && self.get(over).side() == Some(side.opponent()) {
                moves.push(Move::jump(sq, to, over));
            }
        }
    }

    /// King jumps: along each ray the first occupied cell must hold an
    /// opposing piece; every empty cell beyond it, up to the next occupied
    /// cell, is a landing square for that single capture.
    fn king_captures(&self, sq: Square, side: Side, moves: &mut MoveList) {
        for (d_row, d_col) in DIAGONALS {
            let mut captured: Option<Square> = None;
            let mut cur = sq.offset(d_row, d_col);
            while let Some(c) = cur {
                match self.get(c).side() {
                    Some(s) if s == side => break,
                    Some(_) => {
                        if captured.is_some() {
                            break;
                        }
                        captured = Some(c);
                    }
                    None => {
                        if let Some(cap) = captured {
                            moves.push(Move::jump(sq, c, cap));
                        }
                    }
                }
                cur = c.offset(d_row, d_col);
            }
        }
    }

    /// Man steps: one diagonal cell toward the opponent's back rank.
    fn man_steps(&self, sq: Square, side: Side, moves: &mut MoveList) {
        let d_row = side.forward();
        for d_col in [-1, 1] {
            if let Some(to) = sq.offset(d_row, d_col) {
                if self.get(to).is_empty() {
                    moves.push(Move::step(sq, to));
                }
            }
        }
    }

    /// King slides: any distance along a diagonal until obstruction.
    fn king_steps(&self, sq: Square, moves: &mut MoveList) {
        for (d_row, d_col) in DIAGONALS {
            let mut cur = sq.offset(d_row, d_col);
            while let Some(c) = cur {
                if !self.get(c).is_empty() {
                    break;
                }
                moves.push(Move::step(sq, c));
                cur = c.offset(d_row, d_col);
            }
        }
    }
}
