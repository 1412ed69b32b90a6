use crate::game::board::Board;
use crate::game::check::is_in_check;
use crate::game::movegen::reachable_squares;
use crate::game::mv::Move;
use crate::game::piece::Color;
use crate::game::square::Square;

/// Destinations of the piece on `from` that do not leave `color`'s king in
/// check. Each candidate is tried on a clone; `board` is never touched.
pub fn legal_moves(board: &Board, from: Square, color: Color) -> Vec<Square> {
    reachable_squares(board, from)
        .into_iter()
        .filter(|&to| {
            let mut simulated = board.clone();
            simulated.relocate(Move::new(from, to));
            !is_in_check(&simulated, color)
        })
        .collect()
}

/// Every legal move for `color`, piece by piece in board order.
pub fn all_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    board
        .pieces(color)
        .flat_map(|(from, _)| {
            legal_moves(board, from, color)
                .into_iter()
                .map(move |to| Move::new(from, to))
        })
        .collect()
}
