//! Game-tree search.
//!
//! Two cooperating layers:
//! - the decision layer (`root.rs`) walks the root ply, following any
//!   mandatory capture chain and recording the chosen path in a flat
//!   table of decision records;
//! - the evaluation layer (`minimax.rs`) is a plain depth-bounded
//!   alpha-beta returning only a scalar score.
//!
//! The [`Engine`] facade owns the board snapshot, the configuration
//! scalars, and the RNG used for tie-break shuffling.

mod minimax;
mod root;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::{Board, Move, MoveList, ScoringMode, Side, Square};

/// Configuration scalars consumed by the engine.
///
/// The caller is responsible for validating these; the engine uses them
/// as supplied.
#[derive(Clone, Copy, Debug)]
pub struct EngineConfig {
    /// Search depth limit per side, indexed White then Black.
    pub depth: [u32; 2],
    /// Alpha-beta pruning toggle. Disabling only changes the number of
    /// visited nodes, never the selected value; useful for benchmarking.
    pub alpha_beta_pruning: bool,
    /// Seed the tie-break RNG with zero instead of entropy, making
    /// repeated searches over identical positions deterministic.
    pub deterministic: bool,
    /// Leaf scoring heuristic.
    pub scoring: ScoringMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            depth: [4, 4],
            alpha_beta_pruning: true,
            deterministic: false,
            scoring: ScoringMode::default(),
        }
    }
}

impl EngineConfig {
    /// Set the depth limit for one side.
    #[must_use]
    pub fn with_depth(mut self, side: Side, depth: u32) -> Self {
        self.depth[side.index()] = depth;
        self
    }

    /// Set the depth limit for both sides.
    #[must_use]
    pub const fn with_depths(mut self, depth: u32) -> Self {
        self.depth = [depth, depth];
        self
    }

    /// Enable or disable alpha-beta pruning.
    #[must_use]
    pub const fn with_pruning(mut self, enabled: bool) -> Self {
        self.alpha_beta_pruning = enabled;
        self
    }

    /// Enable or disable deterministic tie-breaking.
    #[must_use]
    pub const fn with_deterministic(mut self, deterministic: bool) -> Self {
        self.deterministic = deterministic;
        self
    }

    /// Set the leaf scoring heuristic.
    #[must_use]
    pub const fn with_scoring(mut self, scoring: ScoringMode) -> Self {
        self.scoring = scoring;
        self
    }
}

/// Statistics from the most recent root search.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchStats {
    /// Nodes visited across both search layers.
    pub nodes: u64,
}

/// One root-ply decision point.
///
/// `best` is the move chosen at this point (`None` while undecided, which
/// doubles as the terminal marker during reconstruction); `next` indexes
/// the record for the forced continuation, `None` when the turn ends with
/// this move.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct DecisionRecord {
    pub(crate) best: Option<Move>,
    pub(crate) next: Option<usize>,
}

/// The search engine facade.
///
/// Owns a board snapshot (the caller stays authoritative for the game's
/// board lifecycle), the configuration scalars, the tie-break RNG, and
/// the candidate moves from the last query.
pub struct Engine {
    board: Board,
    config: EngineConfig,
    rng: StdRng,
    candidates: MoveList,
    forced_capture: bool,
    stats: SearchStats,
}

impl Engine {
    /// Create an engine at the standard starting position.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let rng = if config.deterministic {
            StdRng::seed_from_u64(0)
        } else {
            StdRng::from_entropy()
        };
        Engine {
            board: Board::new(),
            config,
            rng,
            candidates: MoveList::new(),
            forced_capture: false,
            stats: SearchStats::default(),
        }
    }

    /// Replace the engine's board snapshot.
    pub fn set_position(&mut self, board: Board) {
        self.board = board;
    }

    /// The engine's current board snapshot.
    #[must_use]
    pub fn position(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Apply a move to the engine's own board.
    ///
    /// Convenience for callers that let the engine track the game; the
    /// same move must also be applied to any external authoritative board.
    pub fn apply(&mut self, mv: Move) {
        self.board = self.board.apply_move(mv);
    }

    /// Candidate moves for a whole side, shuffled for tie-breaking.
    ///
    /// The result is also retained for [`Engine::candidates`] /
    /// [`Engine::forced_capture`]. An empty list means the side has no
    /// legal move.
    pub fn find_legal_moves(&mut self, side: Side) -> (&[Move], bool) {
        let (mut moves, forced) = self.board.side_moves(side);
        moves.as_mut_slice().shuffle(&mut self.rng);
        self.candidates = moves;
        self.forced_capture = forced;
        (self.candidates.as_slice(), self.forced_capture)
    }

    /// Candidate moves for the piece on one square, in generation order.
    pub fn find_legal_moves_at(&mut self, sq: Square) -> (&[Move], bool) {
        let (moves, forced) = self.board.piece_moves(sq);
        self.candidates = moves;
        self.forced_capture = forced;
        (self.candidates.as_slice(), self.forced_capture)
    }

    /// Candidate moves from the last `find_legal_moves*` call.
    #[must_use]
    pub fn candidates(&self) -> &[Move] {
        self.candidates.as_slice()
    }

    /// Whether the last `find_legal_moves*` call found mandatory captures.
    #[must_use]
    pub fn forced_capture(&self) -> bool {
        self.forced_capture
    }

    /// Statistics from the most recent [`Engine::find_best_sequence`].
    #[must_use]
    pub fn last_stats(&self) -> SearchStats {
        self.stats
    }
}
