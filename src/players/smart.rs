//! Perfect-play computer player.

use super::search::minimax;
use super::{Player, PlayerError};
use crate::games::tictactoe::{CELL_COUNT, Game, Mark};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Computer player that searches the full game tree with minimax.
///
/// On an empty board every opening is worth the same under perfect play, so
/// the first move is drawn at random instead of searched.
pub struct SmartPlayer {
    mark: Mark,
    name: String,
    rng: StdRng,
}

impl SmartPlayer {
    /// Creates a smart player whose opening move is seeded from the thread RNG.
    pub fn new(mark: Mark) -> Self {
        Self::with_seed(mark, rand::rng().random())
    }

    /// Creates a smart player with a fixed seed for the opening move.
    pub fn with_seed(mark: Mark, seed: u64) -> Self {
        Self {
            mark,
            name: format!("Smart {mark}"),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for SmartPlayer {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(skip(self, game), fields(mark = %self.mark))]
    fn get_move(&mut self, game: &Game) -> Result<usize, PlayerError> {
        if game.current_winner().is_some() {
            return Err(PlayerError::GameOver);
        }

        let available = game.available_moves();
        if available.len() == CELL_COUNT {
            let cell = available
                .choose(&mut self.rng)
                .copied()
                .ok_or(PlayerError::NoAvailableMoves)?;
            debug!(cell, "Opening move chosen at random");
            return Ok(cell);
        }

        let best = minimax(game, self.mark, self.mark);
        let cell = best.position.ok_or(PlayerError::NoAvailableMoves)?;
        debug!(cell, score = best.score, "Search chose cell");
        Ok(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_opening_is_randomized() {
        let game = Game::new();
        let mut player = SmartPlayer::with_seed(Mark::X, 3);
        let seen: HashSet<usize> = (0..100)
            .map(|_| player.get_move(&game).unwrap())
            .collect();
        assert!(seen.iter().all(|&cell| cell < CELL_COUNT));
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_full_board_fails() {
        let game: Game = "XOXXOOOXX".parse().unwrap();
        let mut player = SmartPlayer::with_seed(Mark::O, 0);
        assert!(matches!(
            player.get_move(&game),
            Err(PlayerError::NoAvailableMoves)
        ));
    }

    #[test]
    fn test_won_board_fails() {
        let game: Game = "XXXOO    ".parse().unwrap();
        let mut player = SmartPlayer::with_seed(Mark::O, 0);
        assert!(matches!(player.get_move(&game), Err(PlayerError::GameOver)));
    }
}
