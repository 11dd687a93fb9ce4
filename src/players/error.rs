//! Player error types.

use derive_more::{Display, Error};

/// Error returned when a player cannot produce a move.
#[derive(Debug, Display, Error)]
pub enum PlayerError {
    /// The board has no empty cells left.
    #[display("No available moves")]
    NoAvailableMoves,

    /// The game has already been won.
    #[display("Game is already over")]
    GameOver,

    /// The human input stream reached end of file.
    #[display("Input closed before a move was entered")]
    InputClosed,

    /// Reading input or writing a prompt failed.
    #[display("Player I/O error: {}", _0)]
    Io(std::io::Error),
}

impl From<std::io::Error> for PlayerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
