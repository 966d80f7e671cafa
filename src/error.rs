//! Error types shared by the rules oracle, the search and the game layer.

use std::io;

/// Errors raised when the rules oracle contract is violated or a game
/// action is not allowed.
#[derive(Debug, thiserror::Error)]
pub enum ChessError {
    /// FEN text could not be parsed or describes an impossible position
    #[error("invalid FEN '{fen}': {reason}")]
    InvalidFen { fen: String, reason: String },

    /// A move was applied that is not legal in the current position
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// Long algebraic move text could not be parsed
    #[error("invalid move text: {0}")]
    InvalidMoveText(String),

    /// `pop` was called on a position with an empty move stack
    #[error("no move to undo")]
    NothingToUndo,

    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("it is not the player's turn")]
    NotPlayersTurn,

    #[error("the game is over")]
    GameOver,

    /// The background search thread could not be started
    #[error("failed to start AI worker: {0}")]
    WorkerSpawn(#[from] io::Error),
}

/// Result type alias for chess operations
pub type ChessResult<T> = Result<T, ChessError>;
