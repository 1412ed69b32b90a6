//! The game state machine.
//!
//! A [`GameSession`] owns the live board and reacts to one kind of event: a
//! square being activated. Depending on the current selection that either
//! selects a piece, reselects, deselects or plays a move. After every move the
//! turn passes and the new side to move is checked for mate or stalemate.
//!
//! ```text
//! Selecting --own piece--> PieceSelected --destination--> (move) --> Selecting
//!                              |  ^                                    |
//!                              +--+ own piece (reselect)               v
//!                              +--> anything else (deselect)        GameOver
//! ```

use std::fmt;

use log::{debug, info, trace};

use crate::game::board::Board;
use crate::game::check::is_in_check;
use crate::game::legality::{all_legal_moves, legal_moves};
use crate::game::mv::Move;
use crate::game::piece::{Color, Piece, PieceKind};
use crate::game::square::Square;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
}

/// The status line shown to players. `Display` produces the exact text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Turn(Color),
    Check(Color),
    Promoted(Color),
    Checkmate { winner: Color },
    Stalemate,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Turn(color) => write!(f, "{color}'s turn"),
            Status::Check(color) => write!(
                f,
                "{color}'s turn. {} KING IS IN CHECK!",
                color.to_string().to_uppercase()
            ),
            Status::Promoted(color) => write!(f, "{color} pawn promoted to Queen!"),
            Status::Checkmate { winner } => {
                write!(f, "CHECKMATE! {} wins!", winner.to_string().to_uppercase())
            }
            Status::Stalemate => write!(f, "STALEMATE! It's a draw!"),
        }
    }
}

#[derive(Debug, Clone)]
struct Selection {
    square: Square,
    destinations: Vec<Square>,
}

/// What a front end needs to redraw after an activation.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionDelta {
    pub board: Board,
    pub selected: Option<Square>,
    pub highlights: Vec<Square>,
    pub status: Status,
    pub to_move: Color,
    pub in_check: bool,
    pub game_over: bool,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    to_move: Color,
    selection: Option<Selection>,
    outcome: Option<Outcome>,
    status: Status,
}

impl GameSession {
    /// Standard starting position, White to move, nothing selected.
    pub fn new() -> Self {
        GameSession {
            board: Board::new(),
            to_move: Color::White,
            selection: None,
            outcome: None,
            status: Status::Turn(Color::White),
        }
    }

    /// A session resumed from an arbitrary position. The position is
    /// evaluated right away, so a side to move that is already mated or
    /// stalemated yields a finished game.
    pub fn from_position(board: Board, to_move: Color) -> Self {
        let mut session = GameSession {
            board,
            to_move,
            selection: None,
            outcome: None,
            status: Status::Turn(to_move),
        };
        session.announce_turn();
        session.evaluate_terminal();
        session
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn in_check(&self) -> bool {
        is_in_check(&self.board, self.to_move)
    }

    pub fn selected(&self) -> Option<Square> {
        self.selection.as_ref().map(|sel| sel.square)
    }

    /// Legal destinations of the selected piece; empty with no selection.
    pub fn destinations(&self) -> &[Square] {
        self.selection
            .as_ref()
            .map(|sel| sel.destinations.as_slice())
            .unwrap_or(&[])
    }

    /// The single entry point for user interaction. Off-board coordinates and
    /// activations after the game has ended leave the session untouched.
    pub fn activate(&mut self, row: usize, col: usize) -> SessionDelta {
        let Some(square) = Square::new(row, col) else {
            trace!("ignoring off-board activation at ({row}, {col})");
            return self.snapshot();
        };
        self.activate_square(square)
    }

    /// Same as [`GameSession::activate`] for an already validated square.
    pub fn activate_square(&mut self, square: Square) -> SessionDelta {
        if self.is_over() {
            trace!("ignoring activation at {square}: game is over");
            return self.snapshot();
        }

        let is_destination = self
            .selection
            .as_ref()
            .is_some_and(|sel| sel.destinations.contains(&square));

        match self.selection.take() {
            Some(sel) if is_destination => self.play(Move::new(sel.square, square)),
            _ if self.board.color_at(square) == Some(self.to_move) => self.select(square),
            Some(sel) => debug!("deselected {}", sel.square),
            None => trace!("nothing to select at {square}"),
        }
        self.snapshot()
    }

    pub fn snapshot(&self) -> SessionDelta {
        SessionDelta {
            board: self.board.clone(),
            selected: self.selected(),
            highlights: self.destinations().to_vec(),
            status: self.status,
            to_move: self.to_move,
            in_check: self.in_check(),
            game_over: self.is_over(),
        }
    }

    fn select(&mut self, square: Square) {
        let destinations = legal_moves(&self.board, square, self.to_move);
        debug!(
            "selected {square} with {} legal destination(s)",
            destinations.len()
        );
        self.selection = Some(Selection {
            square,
            destinations,
        });
    }

    fn play(&mut self, mv: Move) {
        let mover = self.to_move;
        let promoted = self.execute(mv);
        debug!("{mover} played {mv}");

        self.to_move = mover.opponent();
        self.announce_turn();
        if promoted && self.status == Status::Turn(self.to_move) {
            self.status = Status::Promoted(mover);
        }
        self.evaluate_terminal();
    }

    /// Relocates the piece and promotes a pawn that reached its last row.
    /// Returns whether a promotion happened.
    fn execute(&mut self, mv: Move) -> bool {
        let Some(piece) = self.board.relocate(mv) else {
            return false;
        };
        let promotes = piece.kind == PieceKind::Pawn
            && mv.to.row() == piece.color.promotion_row() as usize;
        if promotes {
            self.board
                .set(mv.to, Some(Piece::new(piece.color, PieceKind::Queen)));
            info!("{} pawn promoted to queen on {}", piece.color, mv.to);
        }
        promotes
    }

    fn announce_turn(&mut self) {
        self.status = if self.in_check() {
            Status::Check(self.to_move)
        } else {
            Status::Turn(self.to_move)
        };
    }

    fn evaluate_terminal(&mut self) {
        if !all_legal_moves(&self.board, self.to_move).is_empty() {
            return;
        }
        let outcome = if self.in_check() {
            Outcome::Checkmate {
                winner: self.to_move.opponent(),
            }
        } else {
            Outcome::Stalemate
        };
        self.status = match outcome {
            Outcome::Checkmate { winner } => Status::Checkmate { winner },
            Outcome::Stalemate => Status::Stalemate,
        };
        info!("game over: {}", self.status);
        self.outcome = Some(outcome);
        self.selection = None;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        GameSession::new()
    }
}
