use crate::game::board::Board;
use crate::game::movegen::attacked_squares;
use crate::game::piece::Color;

/// True if any piece of the other side attacks `color`'s king.
///
/// A board without that king counts as "not in check".
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(king) = board.find_king(color) else {
        return false;
    };
    board
        .pieces(color.opponent())
        .any(|(from, _)| attacked_squares(board, from).contains(&king))
}
