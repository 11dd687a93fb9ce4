//! Player that picks a uniformly random available cell.

use super::{Player, PlayerError};
use crate::games::tictactoe::{Game, Mark};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Random computer player.
pub struct RandomPlayer {
    mark: Mark,
    name: String,
    rng: StdRng,
}

impl RandomPlayer {
    /// Creates a random player seeded from the thread RNG.
    pub fn new(mark: Mark) -> Self {
        Self::with_seed(mark, rand::rng().random())
    }

    /// Creates a random player with a fixed seed.
    pub fn with_seed(mark: Mark, seed: u64) -> Self {
        Self {
            mark,
            name: format!("Random {mark}"),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(skip(self, game), fields(mark = %self.mark))]
    fn get_move(&mut self, game: &Game) -> Result<usize, PlayerError> {
        let cell = game
            .available_moves()
            .choose(&mut self.rng)
            .copied()
            .ok_or(PlayerError::NoAvailableMoves)?;
        debug!(cell, "Random player chose cell");
        Ok(cell)
    }
}
