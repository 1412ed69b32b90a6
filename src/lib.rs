//! Rules engine for a two-player chess game driven by square activations.
//!
//! The [`game`] module holds the board, move generation, check detection and
//! the session state machine. The [`ui`] module turns a session snapshot into
//! text for a terminal front end.

pub mod game;
pub mod ui;

pub use crate::game::board::Board;
pub use crate::game::mv::Move;
pub use crate::game::piece::{Color, Piece, PieceKind};
pub use crate::game::session::{GameSession, Outcome, SessionDelta, Status};
pub use crate::game::square::{ParseSquareError, Square};
