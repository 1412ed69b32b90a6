// An 8x8 array of optional pieces. Row 0 holds Black's back rank.
// The board is a plain value: cloning it gives an independent copy that can be
// mutated speculatively.

use crate::game::mv::Move;
use crate::game::piece::{Color, Piece, PieceKind};
use crate::game::square::Square;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    pub fn new() -> Self {
        // Initialize with a standard starting position
        let mut squares = [[None; 8]; 8];
        for (col, kind) in BACK_RANK.iter().enumerate() {
            squares[0][col] = Some(Piece::black(*kind));
            squares[1][col] = Some(Piece::black(PieceKind::Pawn));
            squares[6][col] = Some(Piece::white(PieceKind::Pawn));
            squares[7][col] = Some(Piece::white(*kind));
        }
        Board { squares }
    }

    /// A board with no pieces, for setting up positions by hand.
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Builder-style placement: `Board::empty().with_piece(sq, piece)`.
    pub fn with_piece(mut self, square: Square, piece: Piece) -> Self {
        self.set(square, Some(piece));
        self
    }

    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.row()][square.col()]
    }

    /// Return the piece at a given row/col (0-indexed). Returns None if empty
    /// or off the board.
    pub fn get_piece(&self, row: usize, col: usize) -> Option<Piece> {
        Square::new(row, col).and_then(|sq| self.get(sq))
    }

    pub fn set(&mut self, square: Square, cell: Option<Piece>) {
        self.squares[square.row()][square.col()] = cell;
    }

    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.get(square).map(|piece| piece.color)
    }

    /// Moves whatever stands on `mv.from` to `mv.to`, replacing any capture,
    /// and clears the origin. No promotion is applied here.
    pub fn relocate(&mut self, mv: Move) -> Option<Piece> {
        let piece = self.get(mv.from);
        self.set(mv.to, piece);
        self.set(mv.from, None);
        piece
    }

    /// Linear scan for `color`'s king. `None` only on a malformed board.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| self.get(sq) == Some(Piece::new(color, PieceKind::King)))
    }

    /// Every square holding a piece of `color`, with the piece.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.get(sq) {
            Some(piece) if piece.color == color => Some((sq, piece)),
            _ => None,
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
