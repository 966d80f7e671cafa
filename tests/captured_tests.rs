//! Captured Piece Tests

use terminal_chess::core::Position;
use terminal_chess::engine::captured::starting_count;
use terminal_chess::engine::{captured_pieces, CapturedPieces};
use terminal_chess::shakmaty::{Color, Role};

fn from_fen(fen: &str) -> Position {
    Position::from_fen(fen).unwrap()
}

#[test]
fn test_starting_counts() {
    assert_eq!(starting_count(Role::Pawn), 8);
    assert_eq!(starting_count(Role::Knight), 2);
    assert_eq!(starting_count(Role::Bishop), 2);
    assert_eq!(starting_count(Role::Rook), 2);
    assert_eq!(starting_count(Role::Queen), 1);
}

#[test]
fn test_startpos_nothing_captured() {
    let captured = captured_pieces(&Position::startpos());
    assert!(captured.is_empty());
    assert_eq!(captured, CapturedPieces::default());
    assert_eq!(captured.material_advantage(), 0);
}

#[test]
fn test_missing_knight_and_pawn() {
    let pos = from_fen("r1bqkbnr/pppppppp/8/8/8/8/1PPPPPPP/RNBQKBNR w KQkq - 0 1");
    let captured = captured_pieces(&pos);
    assert_eq!(captured.white, vec![Role::Pawn]);
    assert_eq!(captured.black, vec![Role::Knight]);
    assert_eq!(captured.lost_by(Color::White), &[Role::Pawn]);
    assert_eq!(captured.material_lost(Color::Black), 320);
    assert_eq!(captured.material_advantage(), 220);
}

#[test]
fn test_lists_ordered_by_value() {
    // White is missing the queen, the a1 rook and two pawns
    let pos = from_fen("rnbqkbnr/pppppppp/8/8/8/8/2PPPPPP/1NB1KBNR w Kkq - 0 1");
    let captured = captured_pieces(&pos);
    assert_eq!(captured.white, vec![Role::Queen, Role::Rook, Role::Pawn, Role::Pawn]);
    assert!(captured.black.is_empty());
    assert_eq!(captured.material_advantage(), -1600);
}

#[test]
fn test_promotion_counts_as_lost_pawn() {
    // White promoted the h-pawn; Black has only the king left
    let pos = from_fen("4k3/Q7/8/8/8/8/PPPPPPP1/RNBQKBNR w KQ - 0 1");
    let captured = captured_pieces(&pos);
    assert_eq!(captured.white, vec![Role::Pawn]);
    assert_eq!(
        captured.black,
        vec![
            Role::Queen,
            Role::Rook,
            Role::Rook,
            Role::Bishop,
            Role::Bishop,
            Role::Knight,
            Role::Knight,
            Role::Pawn,
            Role::Pawn,
            Role::Pawn,
            Role::Pawn,
            Role::Pawn,
            Role::Pawn,
            Role::Pawn,
            Role::Pawn,
        ]
    );
    assert_eq!(captured.material_advantage(), 3900);
}

#[test]
fn test_kings_never_listed() {
    let captured = captured_pieces(&from_fen("8/8/4k3/8/8/4K3/8/8 w - - 0 1"));
    assert_eq!(captured.white.len(), 15);
    assert_eq!(captured.black.len(), 15);
    assert!(!captured.white.contains(&Role::King));
    assert_eq!(captured.material_advantage(), 0);
}

#[test]
fn test_capture_during_play() {
    let mut pos = Position::startpos();
    for mv in ["e2e4", "d7d5", "e4d5"] {
        pos.play_uci(mv).unwrap();
    }
    let captured = captured_pieces(&pos);
    assert_eq!(captured.black, vec![Role::Pawn]);
    assert!(captured.white.is_empty());

    pos.pop().unwrap();
    assert!(captured_pieces(&pos).is_empty());
}
