pub mod board;
pub mod check;
pub mod legality;
pub mod movegen;
pub mod mv;
pub mod piece;
pub mod session;
pub mod square;
