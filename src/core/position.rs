//! Position: a shakmaty board plus the move stack, repetition history and
//! game-over rules the search and the game layer rely on.

use std::fmt;
use std::ops::{Deref, DerefMut};

use shakmaty::fen::Fen;
use shakmaty::uci::UciMove;
use shakmaty::zobrist::{Zobrist64, ZobristHash};
use shakmaty::{
    CastlingMode, Chess, Color, EnPassantMode, Move, MoveList, Piece, Position as _, Role, Square,
};

use crate::error::{ChessError, ChessResult};

/// Halfmove clock value at which the game is drawn automatically.
pub const SEVENTY_FIVE_MOVE_PLIES: u32 = 150;

/// Occurrences of one position that end the game automatically.
pub const FIVEFOLD: usize = 5;

fn zobrist(pos: &Chess) -> u64 {
    let z: Zobrist64 = pos.zobrist_hash(EnPassantMode::Legal);
    z.0
}

/// The rule that ended a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    Checkmate { winner: Color },
    Stalemate,
    InsufficientMaterial,
    SeventyFiveMoves,
    FivefoldRepetition,
}

#[derive(Clone, Debug)]
struct Frame {
    previous: Chess,
    mv: Move,
}

/// A chess position with exact undo.
///
/// Every `push` stores the previous shakmaty position, so `pop` restores it
/// bit for bit. The Zobrist hash of every position reached is kept for
/// repetition detection.
#[derive(Clone, Debug)]
pub struct Position {
    current: Chess,
    stack: Vec<Frame>,
    hashes: Vec<u64>,
}

impl Position {
    pub fn startpos() -> Self {
        Self::from(Chess::default())
    }

    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        let invalid = |reason: String| ChessError::InvalidFen {
            fen: fen.to_string(),
            reason,
        };
        let parsed = fen
            .trim()
            .parse::<Fen>()
            .map_err(|e| invalid(e.to_string()))?;
        let chess: Chess = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|e| invalid(e.to_string()))?;
        Ok(Self::from(chess))
    }

    /// The underlying shakmaty position.
    pub fn chess(&self) -> &Chess {
        &self.current
    }

    pub fn turn(&self) -> Color {
        self.current.turn()
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.current.board().piece_at(sq)
    }

    /// Legal moves in move-generator order.
    pub fn legal_moves(&self) -> MoveList {
        self.current.legal_moves()
    }

    pub fn hash(&self) -> u64 {
        zobrist(&self.current)
    }

    /// Number of moves pushed since this position was created.
    pub fn ply(&self) -> usize {
        self.stack.len()
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.stack.last().map(|frame| &frame.mv)
    }

    /// Moves pushed so far, oldest first.
    pub fn moves(&self) -> impl Iterator<Item = &Move> {
        self.stack.iter().map(|frame| &frame.mv)
    }

    /// Apply a legal move.
    pub fn push(&mut self, mv: &Move) -> ChessResult<()> {
        let next = self
            .current
            .clone()
            .play(mv)
            .map_err(|_| ChessError::IllegalMove(mv.to_uci(CastlingMode::Standard).to_string()))?;
        let previous = std::mem::replace(&mut self.current, next);
        self.hashes.push(zobrist(&self.current));
        self.stack.push(Frame {
            previous,
            mv: mv.clone(),
        });
        Ok(())
    }

    /// Undo the last pushed move and return it.
    pub fn pop(&mut self) -> ChessResult<Move> {
        let frame = self.stack.pop().ok_or(ChessError::NothingToUndo)?;
        self.current = frame.previous;
        self.hashes.pop();
        Ok(frame.mv)
    }

    /// Push `mv` and return a guard that pops it again when dropped.
    pub fn make_move(&mut self, mv: &Move) -> ChessResult<MoveGuard<'_>> {
        self.push(mv)?;
        Ok(MoveGuard { position: self })
    }

    /// Parse long algebraic notation (`e2e4`, `e7e8q`, `e1g1`) and push it.
    pub fn play_uci(&mut self, text: &str) -> ChessResult<Move> {
        let uci: UciMove = text
            .trim()
            .parse()
            .map_err(|_| ChessError::InvalidMoveText(text.to_string()))?;
        let mv = uci
            .to_move(&self.current)
            .map_err(|_| ChessError::IllegalMove(text.to_string()))?;
        self.push(&mv)?;
        Ok(mv)
    }

    pub fn is_check(&self) -> bool {
        self.current.is_check()
    }

    pub fn is_checkmate(&self) -> bool {
        self.current.is_checkmate()
    }

    pub fn is_stalemate(&self) -> bool {
        self.current.is_stalemate()
    }

    /// Neither side can possibly deliver mate.
    pub fn is_insufficient_material(&self) -> bool {
        self.current.is_insufficient_material()
    }

    /// 75 moves by each side without a capture or pawn move, unless the
    /// last of them delivered mate.
    pub fn is_seventyfive_moves(&self) -> bool {
        self.current.halfmoves() >= SEVENTY_FIVE_MOVE_PLIES && !self.current.legal_moves().is_empty()
    }

    pub fn is_fivefold_repetition(&self) -> bool {
        self.repetitions() >= FIVEFOLD
    }

    /// How often the current position has occurred, counting itself.
    pub fn repetitions(&self) -> usize {
        let current = self.hash();
        self.hashes.iter().filter(|&&h| h == current).count()
    }

    /// The rule that ended the game, if any.
    pub fn termination(&self) -> Option<Termination> {
        if self.current.legal_moves().is_empty() {
            return Some(if self.current.is_check() {
                Termination::Checkmate { winner: !self.turn() }
            } else {
                Termination::Stalemate
            });
        }
        if self.current.is_insufficient_material() {
            return Some(Termination::InsufficientMaterial);
        }
        if self.current.halfmoves() >= SEVENTY_FIVE_MOVE_PLIES {
            return Some(Termination::SeventyFiveMoves);
        }
        if self.is_fivefold_repetition() {
            return Some(Termination::FivefoldRepetition);
        }
        None
    }

    pub fn is_game_over(&self) -> bool {
        self.termination().is_some()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl From<Chess> for Position {
    fn from(current: Chess) -> Self {
        let hashes = vec![zobrist(&current)];
        Position {
            current,
            stack: Vec::new(),
            hashes,
        }
    }
}

fn piece_char(piece: Piece) -> char {
    let c = match piece.role {
        Role::Pawn => 'p',
        Role::Knight => 'n',
        Role::Bishop => 'b',
        Role::Rook => 'r',
        Role::Queen => 'q',
        Role::King => 'k',
    };
    if piece.color == Color::White {
        c.to_ascii_uppercase()
    } else {
        c
    }
}

/// ASCII diagram, rank 8 at the top.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +-----------------+")?;
        for rank in (0..8).rev() {
            write!(f, "{} |", rank + 1)?;
            for file in 0..8 {
                let c = self.piece_at(Square::ALL[rank * 8 + file]).map_or('.', piece_char);
                write!(f, " {}", c)?;
            }
            writeln!(f, " |")?;
        }
        writeln!(f, "  +-----------------+")?;
        writeln!(f, "    a b c d e f g h")?;
        write!(
            f,
            "{} to move",
            if self.turn() == Color::White { "White" } else { "Black" }
        )
    }
}

/// A pushed move that is popped again when the guard goes out of scope.
///
/// Derefs to the position, so recursion can continue through the guard.
/// Popping through the guard by hand unbalances the stack.
pub struct MoveGuard<'a> {
    position: &'a mut Position,
}

impl Deref for MoveGuard<'_> {
    type Target = Position;

    fn deref(&self) -> &Position {
        self.position
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut Position {
        self.position
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        let _ = self.position.pop();
    }
}
