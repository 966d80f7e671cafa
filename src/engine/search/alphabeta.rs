//! Fixed-depth minimax with alpha-beta pruning.

use crate::core::Position;
use crate::engine::eval::{evaluate, Score};
use crate::error::ChessResult;

use super::searcher::Searcher;
use super::types::INFINITY;

impl Searcher {
    /// Value of `pos` searched `depth` plies deep, from White's perspective.
    ///
    /// Moves are tried in generator order. Every move is made through a
    /// guard, so `pos` is unchanged when this returns, cutoffs and errors
    /// included.
    pub fn minimax(
        &mut self,
        pos: &mut Position,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> ChessResult<Score> {
        self.stats.nodes += 1;

        if depth == 0 || pos.is_game_over() {
            return Ok(evaluate(pos));
        }

        let moves = pos.legal_moves();

        if maximizing {
            let mut best = -INFINITY;
            for mv in &moves {
                let score = {
                    let mut child = pos.make_move(mv)?;
                    self.minimax(&mut child, depth - 1, alpha, beta, false)?
                };
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            Ok(best)
        } else {
            let mut best = INFINITY;
            for mv in &moves {
                let score = {
                    let mut child = pos.make_move(mv)?;
                    self.minimax(&mut child, depth - 1, alpha, beta, true)?
                };
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            Ok(best)
        }
    }
}
