use duelchess::game::square::{ParseSquareError, Square};
use thiserror::Error;

/// One line typed by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Activate(Square),
    Restart,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("nothing entered")]
    Empty,
    #[error(transparent)]
    Square(#[from] ParseSquareError),
    #[error("row and column must both be in 0-7, got {0:?}")]
    Coordinates(String),
}

/// Accepts `new`, `quit`, an algebraic square (`e2`) or a `row col` pair
/// (`6 4`, row 0 being Black's back rank).
pub fn parse(line: &str) -> Result<Input, InputError> {
    let line = line.trim();
    match line {
        "" => Err(InputError::Empty),
        "new" | "restart" => Ok(Input::Restart),
        "quit" | "exit" | "q" => Ok(Input::Quit),
        _ => {
            let parts: Vec<&str> = line.split_whitespace().collect();
            match parts.as_slice() {
                [row, col] => {
                    let square = row
                        .parse::<usize>()
                        .ok()
                        .zip(col.parse::<usize>().ok())
                        .and_then(|(row, col)| Square::new(row, col))
                        .ok_or_else(|| InputError::Coordinates(line.to_string()))?;
                    Ok(Input::Activate(square))
                }
                _ => Ok(Input::Activate(line.parse()?)),
            }
        }
    }
}
