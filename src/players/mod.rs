//! Player trait and implementations.

mod error;
mod human;
mod random;
mod search;
mod smart;

pub use error::PlayerError;
pub use human::{HumanPlayer, LineSource, StdinReader};
pub use random::RandomPlayer;
pub use search::{SearchResult, minimax};
pub use smart::SmartPlayer;

use crate::games::tictactoe::{Game, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Trait for players that can make moves.
pub trait Player {
    /// Returns the mark this player places.
    fn mark(&self) -> Mark;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Gets a move from this player.
    ///
    /// Returns an available cell (0-8) for the player's own mark. The game
    /// state is only borrowed, so choosing a move never changes it.
    fn get_move(&mut self, game: &Game) -> Result<usize, PlayerError>;
}

/// Which strategy drives a player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlayerKind {
    /// Reads moves from standard input.
    Human,
    /// Picks uniformly among the available cells.
    Random,
    /// Plays perfectly using minimax search.
    Smart,
}

impl PlayerKind {
    /// Builds a boxed player of this kind for `mark`.
    ///
    /// `seed` makes the random choices of the random and smart players
    /// reproducible; without it they are seeded from the thread RNG.
    #[instrument]
    pub fn build(self, mark: Mark, seed: Option<u64>) -> Box<dyn Player> {
        match self {
            PlayerKind::Human => Box::new(HumanPlayer::stdio(mark)),
            PlayerKind::Random => Box::new(match seed {
                Some(seed) => RandomPlayer::with_seed(mark, seed),
                None => RandomPlayer::new(mark),
            }),
            PlayerKind::Smart => Box::new(match seed {
                Some(seed) => SmartPlayer::with_seed(mark, seed),
                None => SmartPlayer::new(mark),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parses_lowercase() {
        assert_eq!("smart".parse::<PlayerKind>().unwrap(), PlayerKind::Smart);
        assert_eq!(PlayerKind::Random.to_string(), "random");
    }

    #[test]
    fn test_build_binds_mark() {
        let player = PlayerKind::Smart.build(Mark::O, Some(7));
        assert_eq!(player.mark(), Mark::O);
        let player = PlayerKind::Random.build(Mark::X, None);
        assert_eq!(player.mark(), Mark::X);
    }
}
