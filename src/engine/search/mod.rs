//! Search: fixed-depth minimax, alpha-beta, random tie-breaking at the root.

mod alphabeta;
mod searcher;
mod types;

use rand::Rng;
use shakmaty::Move;

use crate::core::Position;
use crate::engine::eval::Score;
use crate::error::ChessResult;

pub use searcher::Searcher;
pub use types::{SearchResult, SearchStats, INFINITY};

/// Alpha-beta value of `pos` at `depth`, from White's perspective.
pub fn minimax(
    pos: &mut Position,
    depth: u32,
    alpha: Score,
    beta: Score,
    maximizing: bool,
) -> ChessResult<Score> {
    Searcher::new().minimax(pos, depth, alpha, beta, maximizing)
}

/// Best move for the side to move, or `None` when the game is over.
pub fn select_move(pos: &mut Position, depth: u32) -> ChessResult<Option<Move>> {
    select_move_with_rng(pos, depth, &mut rand::rng())
}

/// [`select_move`] with a caller-supplied source of randomness.
pub fn select_move_with_rng<R: Rng + ?Sized>(
    pos: &mut Position,
    depth: u32,
    rng: &mut R,
) -> ChessResult<Option<Move>> {
    Ok(Searcher::new().search(pos, depth, rng)?.best_move)
}
