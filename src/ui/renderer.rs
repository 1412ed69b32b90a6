use crate::game::piece::{Color, Piece, PieceKind};
use crate::game::session::SessionDelta;
use crate::game::square::Square;

/// Which characters to draw pieces with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Glyphs {
    /// Hollow figurines for White, solid ones for Black.
    #[default]
    Unicode,
    /// Upper-case letters for White, lower-case for Black.
    Ascii,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub glyphs: Glyphs,
    pub coordinates: bool,
    /// Draw from Black's side: rank 1 on top, h-file on the left.
    pub flipped: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            glyphs: Glyphs::Unicode,
            coordinates: true,
            flipped: false,
        }
    }
}

/// Simple text renderer for the board.
///
/// Every cell is three characters wide: the selected square is drawn as
/// `[x]`, legal destinations as `(x)`, anything else as ` x `. Empty light
/// squares show `.`, empty dark squares `:`.
pub struct BoardRenderer;

impl BoardRenderer {
    pub fn render(view: &SessionDelta, options: &RenderOptions) -> String {
        let mut output = String::new();
        let order: Vec<usize> = if options.flipped {
            (0..8).rev().collect()
        } else {
            (0..8).collect()
        };

        for &row in &order {
            if options.coordinates {
                output.push_str(&format!("{} |", 8 - row));
            }
            for &col in &order {
                let Some(square) = Square::new(row, col) else {
                    continue;
                };
                let ch = match view.board.get(square) {
                    Some(piece) => Self::glyph(piece, options.glyphs),
                    None if square.is_light() => '.',
                    None => ':',
                };
                let (open, close) = if view.selected == Some(square) {
                    ('[', ']')
                } else if view.highlights.contains(&square) {
                    ('(', ')')
                } else {
                    (' ', ' ')
                };
                output.push(open);
                output.push(ch);
                output.push(close);
            }
            output.push('\n');
        }

        if options.coordinates {
            output.push_str("   ");
            for &col in &order {
                output.push(' ');
                output.push((b'a' + col as u8) as char);
                output.push(' ');
            }
            output.push('\n');
        }
        output.push_str(&view.status.to_string());
        output.push('\n');
        output
    }

    pub fn glyph(piece: Piece, glyphs: Glyphs) -> char {
        match glyphs {
            Glyphs::Unicode => match (piece.color, piece.kind) {
                (Color::White, PieceKind::King) => '♔',
                (Color::White, PieceKind::Queen) => '♕',
                (Color::White, PieceKind::Rook) => '♖',
                (Color::White, PieceKind::Bishop) => '♗',
                (Color::White, PieceKind::Knight) => '♘',
                (Color::White, PieceKind::Pawn) => '♙',
                (Color::Black, PieceKind::King) => '♚',
                (Color::Black, PieceKind::Queen) => '♛',
                (Color::Black, PieceKind::Rook) => '♜',
                (Color::Black, PieceKind::Bishop) => '♝',
                (Color::Black, PieceKind::Knight) => '♞',
                (Color::Black, PieceKind::Pawn) => '♟',
            },
            Glyphs::Ascii => {
                let letter = match piece.kind {
                    PieceKind::King => 'K',
                    PieceKind::Queen => 'Q',
                    PieceKind::Rook => 'R',
                    PieceKind::Bishop => 'B',
                    PieceKind::Knight => 'N',
                    PieceKind::Pawn => 'P',
                };
                match piece.color {
                    Color::White => letter,
                    Color::Black => letter.to_ascii_lowercase(),
                }
            }
        }
    }
}
