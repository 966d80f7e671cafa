pub mod core;
pub mod engine;
pub mod error;
pub mod game;
pub mod uci;

pub use crate::core::Position;
pub use engine::{captured_pieces, evaluate, minimax, select_move};
pub use error::{ChessError, ChessResult};
pub use shakmaty;
pub use uci::UCI;
