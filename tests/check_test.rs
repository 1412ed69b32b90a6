use duelchess::game::board::Board;
use duelchess::game::check::is_in_check;
use duelchess::game::legality::{all_legal_moves, legal_moves};
use duelchess::game::movegen::reachable_squares;
use duelchess::game::mv::Move;
use duelchess::game::piece::{Color, Piece, PieceKind};
use duelchess::game::square::Square;

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn sorted(mut v: Vec<Square>) -> Vec<Square> {
    v.sort();
    v
}

fn squares(list: &[&str]) -> Vec<Square> {
    sorted(list.iter().map(|s| sq(s)).collect())
}

/// Legal moves are a subset of reachable ones, and everything filtered out
/// really does leave the mover's king attacked.
fn assert_filter_is_exact(board: &Board, color: Color) {
    for (from, _) in board.pieces(color) {
        let reachable = reachable_squares(board, from);
        let legal = legal_moves(board, from, color);
        for to in &legal {
            assert!(reachable.contains(to), "{from}{to} is not reachable");
        }
        for to in reachable.iter().filter(|to| !legal.contains(to)) {
            let mut simulated = board.clone();
            simulated.relocate(Move::new(from, *to));
            assert!(is_in_check(&simulated, color), "{from}{to} was wrongly rejected");
        }
    }
}

#[test]
fn test_initial_position_has_no_check() {
    let board = Board::new();
    assert!(!is_in_check(&board, Color::White));
    assert!(!is_in_check(&board, Color::Black));
}

#[test]
fn test_rook_check_can_be_blocked() {
    let open = Board::empty()
        .with_piece(sq("e1"), Piece::white(PieceKind::King))
        .with_piece(sq("e8"), Piece::black(PieceKind::Rook));
    assert!(is_in_check(&open, Color::White));

    let blocked = open.clone().with_piece(sq("e2"), Piece::white(PieceKind::Bishop));
    assert!(!is_in_check(&blocked, Color::White));
}

#[test]
fn test_pawn_checks_diagonally_only() {
    let diagonal = Board::empty()
        .with_piece(sq("e4"), Piece::white(PieceKind::King))
        .with_piece(sq("d5"), Piece::black(PieceKind::Pawn));
    assert!(is_in_check(&diagonal, Color::White));

    let in_front = Board::empty()
        .with_piece(sq("e4"), Piece::white(PieceKind::King))
        .with_piece(sq("e5"), Piece::black(PieceKind::Pawn));
    assert!(!is_in_check(&in_front, Color::White));

    let behind = Board::empty()
        .with_piece(sq("e4"), Piece::white(PieceKind::King))
        .with_piece(sq("d3"), Piece::black(PieceKind::Pawn));
    assert!(!is_in_check(&behind, Color::White));
}

#[test]
fn test_knight_check() {
    let board = Board::empty()
        .with_piece(sq("e8"), Piece::black(PieceKind::King))
        .with_piece(sq("f6"), Piece::white(PieceKind::Knight));
    assert!(is_in_check(&board, Color::Black));
    assert!(!is_in_check(&board, Color::White));
}

#[test]
fn test_own_pieces_never_give_check() {
    let board = Board::empty()
        .with_piece(sq("e1"), Piece::white(PieceKind::King))
        .with_piece(sq("e5"), Piece::white(PieceKind::Rook))
        .with_piece(sq("d2"), Piece::white(PieceKind::Pawn));
    assert!(!is_in_check(&board, Color::White));
}

#[test]
fn test_missing_king_is_not_in_check() {
    let board = Board::empty().with_piece(sq("e8"), Piece::black(PieceKind::Queen));
    assert!(!is_in_check(&board, Color::White));
}

#[test]
fn test_initial_position_has_twenty_moves() {
    let board = Board::new();
    let moves = all_legal_moves(&board, Color::White);
    assert_eq!(moves.len(), 20);
    let pawn_moves = moves
        .iter()
        .filter(|mv| board.get(mv.from).map(|p| p.kind) == Some(PieceKind::Pawn))
        .count();
    assert_eq!(pawn_moves, 16);
}

#[test]
fn test_black_has_twenty_replies_to_every_first_move() {
    let board = Board::new();
    for mv in all_legal_moves(&board, Color::White) {
        let mut after = board.clone();
        after.relocate(mv);
        assert_eq!(all_legal_moves(&after, Color::Black).len(), 20, "after {mv}");
    }
}

#[test]
fn test_pinned_rook_stays_on_the_file() {
    let board = Board::empty()
        .with_piece(sq("e1"), Piece::white(PieceKind::King))
        .with_piece(sq("e2"), Piece::white(PieceKind::Rook))
        .with_piece(sq("e8"), Piece::black(PieceKind::Rook))
        .with_piece(sq("a8"), Piece::black(PieceKind::King));
    assert_eq!(
        sorted(legal_moves(&board, sq("e2"), Color::White)),
        squares(&["e3", "e4", "e5", "e6", "e7", "e8"])
    );
    assert!(reachable_squares(&board, sq("e2")).contains(&sq("a2")));
    assert_filter_is_exact(&board, Color::White);
}

#[test]
fn test_king_cannot_step_into_attack() {
    let board = Board::empty()
        .with_piece(sq("e1"), Piece::white(PieceKind::King))
        .with_piece(sq("a2"), Piece::black(PieceKind::Rook))
        .with_piece(sq("h8"), Piece::black(PieceKind::King));
    assert_eq!(
        sorted(legal_moves(&board, sq("e1"), Color::White)),
        squares(&["d1", "f1"])
    );
}

#[test]
fn test_king_cannot_capture_defended_piece() {
    let board = Board::empty()
        .with_piece(sq("e1"), Piece::white(PieceKind::King))
        .with_piece(sq("e2"), Piece::black(PieceKind::Queen))
        .with_piece(sq("e8"), Piece::black(PieceKind::Rook))
        .with_piece(sq("a8"), Piece::black(PieceKind::King));
    assert!(is_in_check(&board, Color::White));
    assert!(!legal_moves(&board, sq("e1"), Color::White).contains(&sq("e2")));
}

#[test]
fn test_in_check_only_resolving_moves_are_legal() {
    // Black bishop b4 checks e1; only blocking, capturing or stepping away remain.
    let mut board = Board::new();
    board.relocate(Move::new(sq("d2"), sq("d4")));
    board.relocate(Move::new(sq("e7"), sq("e6")));
    board.relocate(Move::new(sq("f8"), sq("b4")));
    assert!(is_in_check(&board, Color::White));
    assert_filter_is_exact(&board, Color::White);

    let moves = all_legal_moves(&board, Color::White);
    assert!(moves.contains(&Move::new(sq("c2"), sq("c3"))));
    assert!(moves.contains(&Move::new(sq("b1"), sq("d2"))));
    assert!(!moves.contains(&Move::new(sq("a2"), sq("a3"))));
}

#[test]
fn test_legal_moves_never_mutate_the_board() {
    let board = Board::new();
    let before = board.clone();
    let _ = all_legal_moves(&board, Color::White);
    assert_eq!(board, before);
}

#[test]
fn test_empty_origin_has_no_legal_moves() {
    assert!(legal_moves(&Board::new(), sq("e4"), Color::White).is_empty());
}

#[test]
fn test_mated_and_stalemated_sides_have_no_moves() {
    let mated = Board::empty()
        .with_piece(sq("e8"), Piece::black(PieceKind::King))
        .with_piece(sq("e7"), Piece::white(PieceKind::Queen))
        .with_piece(sq("e6"), Piece::white(PieceKind::King));
    assert!(all_legal_moves(&mated, Color::Black).is_empty());
    assert!(is_in_check(&mated, Color::Black));

    let stalemated = Board::empty()
        .with_piece(sq("a8"), Piece::black(PieceKind::King))
        .with_piece(sq("c7"), Piece::white(PieceKind::Queen))
        .with_piece(sq("b6"), Piece::white(PieceKind::King));
    assert!(all_legal_moves(&stalemated, Color::Black).is_empty());
    assert!(!is_in_check(&stalemated, Color::Black));
}
