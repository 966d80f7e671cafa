//! Evaluation Tests

use terminal_chess::core::Position;
use terminal_chess::engine::eval::{material_and_position, piece_value, MOBILITY_WEIGHT};
use terminal_chess::engine::pst::{square_value, table_index};
use terminal_chess::engine::{evaluate, evaluate_detailed, Evaluation, MATE_SCORE};
use terminal_chess::shakmaty::{Color, Role, Square};

fn from_fen(fen: &str) -> Position {
    Position::from_fen(fen).unwrap()
}

// ============================================================================
// Piece-square tables
// ============================================================================

#[test]
fn test_table_index_mirrors_white() {
    assert_eq!(table_index(Square::A1, Color::White), 56);
    assert_eq!(table_index(Square::H8, Color::White), 7);
    assert_eq!(table_index(Square::E4, Color::White), 36);
    assert_eq!(table_index(Square::A1, Color::Black), 0);
    assert_eq!(table_index(Square::E5, Color::Black), 36);
}

#[test]
fn test_square_values_symmetric() {
    assert_eq!(square_value(Role::Knight, Square::E4, Color::White), 20);
    assert_eq!(square_value(Role::Knight, Square::E5, Color::Black), 20);
    // Pawns one step from promotion
    assert_eq!(square_value(Role::Pawn, Square::A7, Color::White), 50);
    assert_eq!(square_value(Role::Pawn, Square::A2, Color::Black), 50);
    // Castled king
    assert_eq!(square_value(Role::King, Square::G1, Color::White), 30);
    assert_eq!(square_value(Role::King, Square::G8, Color::Black), 30);
}

#[test]
fn test_piece_values() {
    assert_eq!(piece_value(Role::Pawn), 100);
    assert_eq!(piece_value(Role::Knight), 320);
    assert_eq!(piece_value(Role::Bishop), 330);
    assert_eq!(piece_value(Role::Rook), 500);
    assert_eq!(piece_value(Role::Queen), 900);
    assert_eq!(piece_value(Role::King), 20000);
}

// ============================================================================
// Static terms
// ============================================================================

#[test]
fn test_startpos_static_terms_balanced() {
    let pos = Position::startpos();
    assert_eq!(material_and_position(&pos), (0, 0));
}

#[test]
fn test_startpos_counts_white_mobility() {
    let pos = Position::startpos();
    let eval = evaluate_detailed(&pos);
    assert_eq!(eval.material, 0);
    assert_eq!(eval.positional, 0);
    assert_eq!(eval.mobility, 20 * MOBILITY_WEIGHT);
    assert_eq!(eval.total, 40);
    assert_eq!(evaluate(&pos), 40);
}

#[test]
fn test_startpos_black_to_move() {
    let pos = from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1");
    assert_eq!(evaluate(&pos), -40);
}

#[test]
fn test_after_e4() {
    let mut pos = Position::startpos();
    pos.play_uci("e2e4").unwrap();
    let eval = evaluate_detailed(&pos);
    assert_eq!(eval.material, 0);
    assert_eq!(eval.positional, 40);
    assert_eq!(eval.mobility, -40);
    assert_eq!(eval.total, 0);
}

#[test]
fn test_rook_endgame_breakdown() {
    // Kings and rook on zero squares: 15 white moves, castling included
    let pos = from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1");
    assert_eq!(
        evaluate_detailed(&pos),
        Evaluation {
            material: 500,
            positional: 0,
            mobility: 30,
            total: 530,
        }
    );
}

#[test]
fn test_evaluate_deterministic() {
    let pos = from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    let first = evaluate(&pos);
    for _ in 0..10 {
        assert_eq!(evaluate(&pos), first);
    }
}

#[test]
fn test_extra_queen_favors_owner() {
    let white_up = from_fen("3qk3/8/8/8/8/8/8/3QK2Q w - - 0 1");
    let black_up = from_fen("q2qk3/8/8/8/8/8/8/3QK3 w - - 0 1");
    assert!(evaluate(&white_up) > 700);
    assert!(evaluate(&black_up) < -700);
}

// ============================================================================
// Terminal positions
// ============================================================================

#[test]
fn test_white_checkmated() {
    let pos = from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
    let eval = evaluate_detailed(&pos);
    assert_eq!(eval.total, -MATE_SCORE);
    assert_eq!(eval.material, 0);
}

#[test]
fn test_black_checkmated() {
    let pos = from_fen("4Q1k1/5ppp/8/8/8/8/8/7K b - - 1 1");
    assert_eq!(evaluate(&pos), MATE_SCORE);
}

#[test]
fn test_stalemate_is_zero() {
    let pos = from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert_eq!(evaluate(&pos), 0);
}

#[test]
fn test_insufficient_material_is_zero() {
    assert_eq!(evaluate(&from_fen("8/8/4k3/8/8/4K3/8/8 w - - 0 1")), 0);
    assert_eq!(evaluate(&from_fen("8/8/4k3/8/8/4K3/8/6B1 w - - 0 1")), 0);
    assert_eq!(evaluate(&from_fen("8/8/4k3/8/8/4K3/8/6N1 b - - 0 1")), 0);
}
