//! Searcher: root move selection and search entry point.

use std::time::Instant;

use rand::Rng;
use rand::seq::IteratorRandom;
use shakmaty::{CastlingMode, Color};
use tracing::{debug, trace};

use crate::core::Position;
use crate::engine::eval::Score;
use crate::error::ChessResult;

use super::types::{SearchResult, SearchStats, INFINITY};

pub struct Searcher {
    pub(super) stats: SearchStats,
}

impl Searcher {
    pub fn new() -> Self {
        Searcher {
            stats: SearchStats::default(),
        }
    }

    /// Counters of the most recent search.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Search every root move `depth` plies deep and pick one of the moves
    /// tying for the best value at random.
    ///
    /// A finished game yields an empty result. Depth 0 scores the root
    /// moves by static evaluation of the positions they lead to.
    pub fn search<R: Rng + ?Sized>(
        &mut self,
        pos: &mut Position,
        depth: u32,
        rng: &mut R,
    ) -> ChessResult<SearchResult> {
        self.stats = SearchStats::default();
        let start_time = Instant::now();

        if pos.is_game_over() {
            debug!(depth, "search requested in a finished game");
            return Ok(SearchResult::empty(depth));
        }

        let maximizer = pos.turn() == Color::White;
        let child_depth = depth.saturating_sub(1);
        let mut best: Option<Score> = None;
        let mut candidates = Vec::new();

        for mv in pos.legal_moves() {
            let value = {
                let mut child = pos.make_move(&mv)?;
                self.minimax(&mut child, child_depth, -INFINITY, INFINITY, !maximizer)?
            };
            trace!(mv = %mv.to_uci(CastlingMode::Standard), value, "root move");

            let improves = match best {
                None => true,
                Some(b) if maximizer => value > b,
                Some(b) => value < b,
            };
            if improves {
                best = Some(value);
                candidates.clear();
                candidates.push(mv);
            } else if best == Some(value) {
                candidates.push(mv);
            }
        }

        let best_move = candidates.iter().choose(rng).cloned();
        debug!(
            depth,
            score = ?best,
            candidates = candidates.len(),
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "search finished"
        );

        Ok(SearchResult {
            best_move,
            score: best,
            candidates,
            depth,
            stats: self.stats.clone(),
        })
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}
