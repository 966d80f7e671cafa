//! Game layer
//!
//! State a front-end needs to run a human-versus-AI game on top of the
//! engine: difficulty, status messages and the AI turn hand-off.

pub mod config;
pub mod session;
pub mod status;

pub use config::{Difficulty, GameConfig};
pub use session::{destination, spawn_think, think, AiReply, AiRequest, GameSession};
pub use status::GameStatus;
