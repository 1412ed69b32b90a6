//! Pseudo-legal move generation.
//!
//! Two entry points share the same stepping code:
//! - [`reachable_squares`]: where a piece may go, ignoring its own king's safety.
//! - [`attacked_squares`]: which squares a piece threatens, used by check
//!   detection.
//!
//! They differ only for pawns, whose pushes are never attacks and whose
//! diagonals are attacked whether or not anything stands there.

use crate::game::board::Board;
use crate::game::piece::{Color, PieceKind};
use crate::game::square::Square;

const ROOK_DIRS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

const QUEEN_DIRS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// Same offsets as the queen, one step each.
const KING_DELTAS: [(i8, i8); 8] = QUEEN_DIRS;

/// Destinations the piece on `from` can move to under normal rules, without
/// regard to check. Empty when `from` is empty.
pub fn reachable_squares(board: &Board, from: Square) -> Vec<Square> {
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };
    let mut out = Vec::new();
    match piece.kind {
        PieceKind::Pawn => {
            pawn_pushes(board, from, piece.color, &mut out);
            pawn_captures(board, from, piece.color, &mut out);
        }
        kind => stepping_moves(board, from, piece.color, kind, &mut out),
    }
    out
}

/// Squares the piece on `from` attacks. Empty when `from` is empty.
pub fn attacked_squares(board: &Board, from: Square) -> Vec<Square> {
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };
    let mut out = Vec::new();
    match piece.kind {
        PieceKind::Pawn => {
            let dr = piece.color.forward();
            out.extend([-1, 1].into_iter().filter_map(|dc| from.offset(dr, dc)));
        }
        kind => stepping_moves(board, from, piece.color, kind, &mut out),
    }
    out
}

fn stepping_moves(board: &Board, from: Square, color: Color, kind: PieceKind, out: &mut Vec<Square>) {
    match kind {
        PieceKind::Knight => walk_each(board, from, color, &KNIGHT_DELTAS, 1, out),
        PieceKind::King => walk_each(board, from, color, &KING_DELTAS, 1, out),
        PieceKind::Bishop => walk_each(board, from, color, &BISHOP_DIRS, 7, out),
        PieceKind::Rook => walk_each(board, from, color, &ROOK_DIRS, 7, out),
        PieceKind::Queen => walk_each(board, from, color, &QUEEN_DIRS, 7, out),
        PieceKind::Pawn => {}
    }
}

fn walk_each(
    board: &Board,
    from: Square,
    color: Color,
    dirs: &[(i8, i8)],
    max_steps: u8,
    out: &mut Vec<Square>,
) {
    for &dir in dirs {
        walk(board, from, color, dir, max_steps, out);
    }
}

/// Steps from `from` along `dir` up to `max_steps` times. Empty squares are
/// recorded and passed through; the first occupied square ends the walk and is
/// recorded only when it holds a piece of the other color.
fn walk(
    board: &Board,
    from: Square,
    color: Color,
    (dr, dc): (i8, i8),
    max_steps: u8,
    out: &mut Vec<Square>,
) {
    let mut cur = from;
    for _ in 0..max_steps {
        let Some(next) = cur.offset(dr, dc) else {
            return;
        };
        match board.color_at(next) {
            None => out.push(next),
            Some(other) => {
                if other != color {
                    out.push(next);
                }
                return;
            }
        }
        cur = next;
    }
}

fn pawn_pushes(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    let dr = color.forward();
    let Some(one) = from.offset(dr, 0).filter(|&sq| board.get(sq).is_none()) else {
        return;
    };
    out.push(one);
    if from.row() == color.pawn_row() as usize {
        if let Some(two) = one.offset(dr, 0).filter(|&sq| board.get(sq).is_none()) {
            out.push(two);
        }
    }
}

fn pawn_captures(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    let dr = color.forward();
    for dc in [-1, 1] {
        if let Some(target) = from.offset(dr, dc) {
            if board.color_at(target) == Some(color.opponent()) {
                out.push(target);
            }
        }
    }
}
