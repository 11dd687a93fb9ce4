//! Tic-tac-toe board state and rules.

mod error;
mod rules;
mod types;

pub use error::{MoveError, ParseGameError};
pub use rules::Game;
pub use types::{Board, CELL_COUNT, Mark, Square};
