//! Chess engine components
//!
//! This module contains the AI:
//! - Material, piece-square and mobility evaluation
//! - Fixed-depth minimax with alpha-beta pruning
//! - Root move selection with random tie-breaking
//! - Captured-piece accounting

pub mod captured;
pub mod eval;
pub mod pst;
pub mod search;

pub use captured::{captured_pieces, CapturedPieces};
pub use eval::{evaluate, evaluate_detailed, Evaluation, Score, DRAW_SCORE, MATE_SCORE};
pub use search::{minimax, select_move, select_move_with_rng, SearchResult, SearchStats, Searcher, INFINITY};
