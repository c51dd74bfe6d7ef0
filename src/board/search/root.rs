//! Decision layer: root-ply search with forced-chain path recording.
//!
//! The value-returning recursion never threads move lists upward.
//! Instead every decision point appends one record to a flat table and
//! stores the index of its chosen continuation; the final sequence is
//! reconstructed by walking the table from record 0.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::super::SCORE_INF;
use super::{Board, DecisionRecord, Engine, Move, ScoringMode, SearchStats, Side, Square};

/// Per-search state shared by the decision and evaluation layers.
pub(crate) struct SearchContext<'a> {
    pub(crate) root_side: Side,
    pub(crate) max_depth: u32,
    pub(crate) pruning: bool,
    pub(crate) scoring: ScoringMode,
    pub(crate) rng: &'a mut StdRng,
    pub(crate) records: Vec<DecisionRecord>,
    pub(crate) nodes: u64,
}

impl Engine {
    /// Find the move sequence `side` should play.
    ///
    /// Returns a single move, or the whole forced capture chain when the
    /// chosen move keeps capturing. An empty sequence means `side` has no
    /// legal move and has lost.
    pub fn find_best_sequence(&mut self, side: Side) -> Vec<Move> {
        let mut ctx = SearchContext {
            root_side: side,
            max_depth: self.config.depth[side.index()],
            pruning: self.config.alpha_beta_pruning,
            scoring: self.config.scoring,
            rng: &mut self.rng,
            records: Vec::new(),
            nodes: 0,
        };
        ctx.decide(self.board.clone(), None, -1.0);
        let sequence = ctx.sequence();
        self.stats = SearchStats { nodes: ctx.nodes };
        #[cfg(feature = "logging")]
        log::debug!(
            "{side} searched {} nodes at depth {}, sequence {:?}",
            self.stats.nodes,
            self.config.depth[side.index()],
            sequence.iter().map(Move::to_string).collect::<Vec<_>>(),
        );
        sequence
    }
}

impl SearchContext<'_> {
    /// Decide one step of the root ply.
    ///
    /// Appends a record for this decision point, tries every candidate,
    /// and keeps the first candidate whose score strictly beats the
    /// running best. A capture whose landing square can capture again
    /// recurses here at the same ply; once the chain ends the position is
    /// handed to the evaluation layer for the opponent at depth 0 with
    /// the running best as the initial pruning bound.
    pub(crate) fn decide(
        &mut self,
        board: Board,
        chain: Option<Square>,
        best_so_far: f64,
    ) -> f64 {
        self.nodes += 1;
        let record = self.records.len();
        self.records.push(DecisionRecord::default());

        let (moves, forced) = match chain {
            Some(sq) => board.piece_moves(sq),
            None => {
                let (mut moves, forced) = board.side_moves(self.root_side);
                moves.as_mut_slice().shuffle(&mut *self.rng);
                (moves, forced)
            }
        };
        if chain.is_some() && !forced {
            // Chain exhausted: the opponent replies.
            return self.evaluate(
                board,
                self.root_side.opponent(),
                0,
                best_so_far,
                SCORE_INF + 1.0,
                None,
            );
        }

        let mut best = best_so_far;
        for &mv in moves.as_slice() {
            // Index the recursive decide() call will occupy.
            let continuation = self.records.len();
            let next_board = board.apply_move(mv);
            let score = if forced {
                self.decide(next_board, Some(mv.to), best)
            } else {
                self.evaluate(
                    next_board,
                    self.root_side.opponent(),
                    0,
                    best,
                    SCORE_INF + 1.0,
                    None,
                )
            };
            if score > best {
                best = score;
                self.records[record] = DecisionRecord {
                    best: Some(mv),
                    next: if forced { Some(continuation) } else { None },
                };
            }
        }
        best
    }

    /// Reconstruct the chosen sequence by walking the record table.
    pub(crate) fn sequence(&self) -> Vec<Move> {
        let mut sequence = Vec::new();
        let mut index = Some(0);
        while let Some(i) = index {
            let record = &self.records[i];
            let Some(mv) = record.best else {
                break;
            };
            sequence.push(mv);
            index = record.next;
        }
        sequence
    }
}
