//! One human-versus-AI game: selection, player moves and AI turns.
//!
//! The AI never runs on the caller's thread implicitly. A session hands out
//! an [`AiRequest`] holding its own copy of the position; the caller runs
//! [`think`] wherever it likes and feeds the [`AiReply`] back. Replies that
//! belong to a game which has since been reset are dropped.

use std::thread::{self, JoinHandle};

use shakmaty::uci::UciMove;
use shakmaty::{CastlingMode, Move, Role, Square};
use tracing::{debug, info};

use super::config::GameConfig;
use super::status::GameStatus;
use crate::core::Position;
use crate::engine::{captured_pieces, select_move, CapturedPieces};
use crate::error::{ChessError, ChessResult};

/// Work order for one AI move.
#[derive(Clone, Debug)]
pub struct AiRequest {
    pub position: Position,
    pub depth: u32,
    pub generation: u64,
}

#[derive(Clone, Debug)]
pub struct AiReply {
    pub best_move: Option<Move>,
    pub generation: u64,
}

/// Run the move selector for `request`.
pub fn think(mut request: AiRequest) -> ChessResult<AiReply> {
    let best_move = select_move(&mut request.position, request.depth)?;
    Ok(AiReply {
        best_move,
        generation: request.generation,
    })
}

/// Run [`think`] on a dedicated worker thread.
pub fn spawn_think(request: AiRequest) -> ChessResult<JoinHandle<ChessResult<AiReply>>> {
    let handle = thread::Builder::new()
        .name("chess-ai".to_string())
        .spawn(move || think(request))?;
    Ok(handle)
}

/// Square the moving piece lands on; castling reports the king's square.
pub fn destination(mv: &Move) -> Square {
    match mv.to_uci(CastlingMode::Standard) {
        UciMove::Normal { to, .. } => to,
        _ => mv.to(),
    }
}

pub struct GameSession {
    position: Position,
    config: GameConfig,
    selected: Option<Square>,
    last_move: Option<(Square, Square)>,
    thinking: bool,
    generation: u64,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        Self::with_position(config, Position::startpos())
    }

    /// Start from an arbitrary position, e.g. one loaded from FEN.
    pub fn with_position(config: GameConfig, position: Position) -> Self {
        GameSession {
            position,
            config,
            selected: None,
            last_move: None,
            thinking: false,
            generation: 0,
        }
    }

    /// Back to the starting position with the same configuration. Any AI
    /// request still in flight becomes stale.
    pub fn reset(&mut self) {
        self.position = Position::startpos();
        self.selected = None;
        self.last_move = None;
        self.thinking = false;
        self.generation += 1;
        info!(generation = self.generation, "game reset");
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    pub fn last_move(&self) -> Option<(Square, Square)> {
        self.last_move
    }

    pub fn is_thinking(&self) -> bool {
        self.thinking
    }

    pub fn is_player_turn(&self) -> bool {
        self.position.turn() == self.config.player_color
    }

    pub fn is_game_over(&self) -> bool {
        self.position.is_game_over()
    }

    pub fn status(&self) -> GameStatus {
        GameStatus::of(&self.position)
    }

    pub fn captured(&self) -> CapturedPieces {
        captured_pieces(&self.position)
    }

    fn accepts_input(&self) -> bool {
        !self.thinking && !self.is_game_over() && self.is_player_turn()
    }

    /// Squares the piece on `from` can legally move to.
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        self.position
            .legal_moves()
            .iter()
            .filter(|mv| mv.from() == Some(from))
            .map(destination)
            .collect()
    }

    pub fn selected_destinations(&self) -> Vec<Square> {
        self.selected
            .map(|sq| self.legal_destinations(sq))
            .unwrap_or_default()
    }

    /// Select the player's piece on `sq` if it has a legal move; anything
    /// else clears the selection. Ignored while input is not accepted.
    pub fn select(&mut self, sq: Square) -> bool {
        if !self.accepts_input() {
            return false;
        }
        let own = self
            .position
            .piece_at(sq)
            .is_some_and(|piece| piece.color == self.config.player_color);
        let movable = own && self.position.legal_moves().iter().any(|mv| mv.from() == Some(sq));
        self.selected = movable.then_some(sq);
        movable
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Play the player's move from `from` to `to`. Promotions become queens.
    pub fn player_move(&mut self, from: Square, to: Square) -> ChessResult<Move> {
        if self.is_game_over() {
            return Err(ChessError::GameOver);
        }
        if self.thinking || !self.is_player_turn() {
            return Err(ChessError::NotPlayersTurn);
        }

        let matching: Vec<Move> = self
            .position
            .legal_moves()
            .into_iter()
            .filter(|mv| mv.from() == Some(from) && destination(mv) == to)
            .collect();
        let mv = matching
            .iter()
            .find(|mv| mv.promotion() == Some(Role::Queen))
            .or_else(|| matching.first())
            .cloned()
            .ok_or_else(|| ChessError::IllegalMove(format!("{}{}", from, to)))?;

        self.position.push(&mv)?;
        self.last_move = Some((from, to));
        self.selected = None;
        debug!(mv = %mv.to_uci(CastlingMode::Standard), "player move");
        Ok(mv)
    }

    /// Hand out an AI work order when it is the AI's turn. The session is
    /// marked as thinking until the reply is applied or the game is reset.
    pub fn request_ai_move(&mut self) -> Option<AiRequest> {
        if self.thinking || self.is_game_over() || self.is_player_turn() {
            return None;
        }
        self.thinking = true;
        Some(AiRequest {
            position: self.position.clone(),
            depth: self.config.difficulty.depth(),
            generation: self.generation,
        })
    }

    /// Apply an AI reply. Returns whether a move was played; stale replies
    /// and empty replies play nothing.
    pub fn apply_ai_reply(&mut self, reply: AiReply) -> ChessResult<bool> {
        if reply.generation != self.generation {
            debug!(
                reply = reply.generation,
                current = self.generation,
                "discarding stale AI reply"
            );
            return Ok(false);
        }
        self.thinking = false;

        let Some(mv) = reply.best_move else {
            return Ok(false);
        };
        self.position.push(&mv)?;
        self.last_move = mv.from().map(|from| (from, destination(&mv)));
        debug!(mv = %mv.to_uci(CastlingMode::Standard), "AI move");
        Ok(true)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
