use std::fmt;

use shakmaty::Color;

use crate::core::{Position, Termination};

/// What the player should be told about the current position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Checkmate { winner: Color },
    Stalemate,
    InsufficientMaterial,
    SeventyFiveMoves,
    FivefoldRepetition,
    Check,
    InProgress,
}

impl GameStatus {
    pub fn of(pos: &Position) -> Self {
        match pos.termination() {
            Some(Termination::Checkmate { winner }) => GameStatus::Checkmate { winner },
            Some(Termination::Stalemate) => GameStatus::Stalemate,
            Some(Termination::InsufficientMaterial) => GameStatus::InsufficientMaterial,
            Some(Termination::SeventyFiveMoves) => GameStatus::SeventyFiveMoves,
            Some(Termination::FivefoldRepetition) => GameStatus::FivefoldRepetition,
            None if pos.is_check() => GameStatus::Check,
            None => GameStatus::InProgress,
        }
    }

    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::Check | GameStatus::InProgress)
    }
}

/// Empty for a game in progress.
impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Checkmate { winner } => {
                let winner = if *winner == Color::White { "White" } else { "Black" };
                write!(f, "Checkmate! {} wins!", winner)
            }
            GameStatus::Stalemate => f.write_str("Stalemate - Draw!"),
            GameStatus::InsufficientMaterial => f.write_str("Draw - Insufficient material"),
            GameStatus::SeventyFiveMoves => f.write_str("Draw - 75 move rule"),
            GameStatus::FivefoldRepetition => f.write_str("Draw - Fivefold repetition"),
            GameStatus::Check => f.write_str("Check!"),
            GameStatus::InProgress => Ok(()),
        }
    }
}
