//! Leaf-node counting over the legal move tree.

use crate::core::position::Position;
use crate::error::ChessResult;

/// Count the leaf nodes `depth` plies below `pos`. The position is restored
/// before returning.
pub fn perft(pos: &mut Position, depth: u32) -> ChessResult<u64> {
    if depth == 0 {
        return Ok(1);
    }
    let moves = pos.legal_moves();
    if depth == 1 {
        return Ok(moves.len() as u64);
    }
    let mut nodes = 0;
    for mv in &moves {
        let mut child = pos.make_move(mv)?;
        nodes += perft(&mut child, depth - 1)?;
    }
    Ok(nodes)
}
