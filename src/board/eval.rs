//! Static position evaluation.

use super::{Board, Cell, Side, Square};

/// Finite stand-in for an infinitely bad score, so alpha-beta bound
/// arithmetic stays on well-defined float comparisons.
pub const SCORE_INF: f64 = 1e9;

/// Heuristic used for leaf scoring.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum ScoringMode {
    /// Piece counts only, kings weighted 4.
    #[default]
    Material,
    /// Piece counts with kings weighted 5, plus a small per-man bonus
    /// proportional to rows advanced toward promotion.
    MaterialAndAdvance,
}

impl ScoringMode {
    #[inline]
    #[must_use]
    const fn king_weight(self) -> f64 {
        match self {
            ScoringMode::Material => 4.0,
            ScoringMode::MaterialAndAdvance => 5.0,
        }
    }
}

impl Board {
    /// Material-ratio score from `perspective`'s point of view.
    ///
    /// Lower is better for `perspective`: the result is the weighted
    /// material of the opponent divided by the weighted material of
    /// `perspective`. A side with no material left scores [`SCORE_INF`]
    /// from its own perspective and `0.0` from the opponent's.
    #[must_use]
    pub fn score(&self, perspective: Side, mode: ScoringMode) -> f64 {
        let mut men = [0.0f64; 2];
        let mut kings = [0.0f64; 2];
        for row in 0..8 {
            for col in 0..8 {
                match self.get(Square(row, col)) {
                    Cell::Man(side) => {
                        men[side.index()] += 1.0;
                        if mode == ScoringMode::MaterialAndAdvance {
                            let advanced = match side {
                                Side::White => 7 - row,
                                Side::Black => row,
                            };
                            men[side.index()] += 0.05 * advanced as f64;
                        }
                    }
                    Cell::King(side) => kings[side.index()] += 1.0,
                    Cell::Empty => {}
                }
            }
        }

        let own = perspective.index();
        let opp = perspective.opponent().index();
        if men[own] + kings[own] == 0.0 {
            return SCORE_INF;
        }
        if men[opp] + kings[opp] == 0.0 {
            return 0.0;
        }
        let king_weight = mode.king_weight();
        (men[opp] + kings[opp] * king_weight) / (men[own] + kings[own] * king_weight)
    }
}
