//! Captured pieces, derived from what is missing from the board.
//!
//! No capture history is kept: a piece counts as captured when its color
//! has fewer of that role on the board than in the starting position.
//! Promotions therefore show up as a captured pawn.

use shakmaty::{Color, Role, Square};

use super::eval::{piece_value, Score};
use crate::core::Position;

/// Roles that can be captured, most valuable first. This is also the order
/// of every captured list.
pub const CAPTURABLE: [Role; 5] = [Role::Queen, Role::Rook, Role::Bishop, Role::Knight, Role::Pawn];

pub fn starting_count(role: Role) -> usize {
    match role {
        Role::Pawn => 8,
        Role::Knight | Role::Bishop | Role::Rook => 2,
        Role::Queen | Role::King => 1,
    }
}

/// Pieces each color has lost.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CapturedPieces {
    /// White pieces no longer on the board
    pub white: Vec<Role>,
    /// Black pieces no longer on the board
    pub black: Vec<Role>,
}

impl CapturedPieces {
    /// Pieces lost by `color`.
    pub fn lost_by(&self, color: Color) -> &[Role] {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.white.is_empty() && self.black.is_empty()
    }

    /// Material value lost by `color`.
    pub fn material_lost(&self, color: Color) -> Score {
        self.lost_by(color).iter().map(|&role| piece_value(role)).sum()
    }

    /// Positive when White has taken more material than Black.
    pub fn material_advantage(&self) -> Score {
        self.material_lost(Color::Black) - self.material_lost(Color::White)
    }
}

fn role_index(role: Role) -> usize {
    match role {
        Role::Pawn => 0,
        Role::Knight => 1,
        Role::Bishop => 2,
        Role::Rook => 3,
        Role::Queen => 4,
        Role::King => 5,
    }
}

pub fn captured_pieces(pos: &Position) -> CapturedPieces {
    let mut counts = [[0usize; 6]; 2];
    for sq in Square::ALL {
        if let Some(piece) = pos.piece_at(sq) {
            let side = if piece.color == Color::White { 0 } else { 1 };
            counts[side][role_index(piece.role)] += 1;
        }
    }

    let missing = |side: usize| -> Vec<Role> {
        CAPTURABLE
            .iter()
            .flat_map(|&role| {
                let lost = starting_count(role).saturating_sub(counts[side][role_index(role)]);
                std::iter::repeat_n(role, lost)
            })
            .collect()
    };

    CapturedPieces {
        white: missing(0),
        black: missing(1),
    }
}
