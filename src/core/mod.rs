//! Chess rules
//!
//! This module wraps the shakmaty move generator into the position type
//! used everywhere else:
//! - Exact push / pop with an RAII move guard
//! - Repetition and seventy-five-move draw detection
//! - Perft for move generator checks

pub mod perft;
pub mod position;

pub use perft::perft;
pub use position::{MoveGuard, Position, Termination};
