//! Search results, stats, and constants.

use shakmaty::Move;

use crate::engine::eval::Score;

/// Root window bound; wider than any evaluation, mate scores included.
pub const INFINITY: Score = 30000;

#[derive(Clone, Debug, Default)]
pub struct SearchStats {
    /// Positions entered by `minimax`, leaves included.
    pub nodes: u64,
    pub cutoffs: u64,
}

#[derive(Clone, Debug)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    /// Value shared by every candidate; `None` when there was nothing to search.
    pub score: Option<Score>,
    /// All root moves tying for the best value, in generator order.
    pub candidates: Vec<Move>,
    pub depth: u32,
    pub stats: SearchStats,
}

impl SearchResult {
    pub(super) fn empty(depth: u32) -> Self {
        SearchResult {
            best_move: None,
            score: None,
            candidates: Vec::new(),
            depth,
            stats: SearchStats::default(),
        }
    }
}
