//! Static evaluation: material, piece-square tables and mobility.
//!
//! Scores are always from White's point of view.

use shakmaty::{Color, Role, Square};

use super::pst;
use crate::core::Position;

pub type Score = i32;

/// Score of a position in which White (negative) or Black (positive) is mated.
pub const MATE_SCORE: Score = 20000;
pub const DRAW_SCORE: Score = 0;
pub const MOBILITY_WEIGHT: Score = 2;

pub fn piece_value(role: Role) -> Score {
    match role {
        Role::Pawn => 100,
        Role::Knight => 320,
        Role::Bishop => 330,
        Role::Rook => 500,
        Role::Queen => 900,
        Role::King => 20000,
    }
}

#[inline]
fn sign(color: Color) -> Score {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}

/// The terms that make up an evaluation.
///
/// For a finished game only `total` is set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Evaluation {
    pub material: Score,
    pub positional: Score,
    pub mobility: Score,
    pub total: Score,
}

/// Material and piece-square sums, White minus Black.
pub fn material_and_position(pos: &Position) -> (Score, Score) {
    let mut material = 0;
    let mut positional = 0;
    for sq in Square::ALL {
        if let Some(piece) = pos.piece_at(sq) {
            let s = sign(piece.color);
            material += s * piece_value(piece.role);
            positional += s * pst::square_value(piece.role, sq, piece.color);
        }
    }
    (material, positional)
}

pub fn evaluate_detailed(pos: &Position) -> Evaluation {
    let moves = pos.legal_moves();
    if moves.is_empty() {
        let total = if pos.is_check() {
            -sign(pos.turn()) * MATE_SCORE
        } else {
            DRAW_SCORE
        };
        return Evaluation { total, ..Evaluation::default() };
    }
    if pos.is_insufficient_material() {
        return Evaluation::default();
    }

    let (material, positional) = material_and_position(pos);
    // Only the side to move is counted.
    let mobility = sign(pos.turn()) * moves.len() as Score * MOBILITY_WEIGHT;
    Evaluation {
        material,
        positional,
        mobility,
        total: material + positional + mobility,
    }
}

/// Evaluate a position from White's perspective.
pub fn evaluate(pos: &Position) -> Score {
    evaluate_detailed(pos).total
}
