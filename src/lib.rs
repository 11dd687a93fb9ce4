//! Strictly Minimax - tic-tac-toe with interchangeable move strategies
//!
//! Two players take turns on a 3x3 board. Each side is driven by a
//! [`Player`]: a human typing cell numbers, a uniformly random mover, or a
//! perfect player backed by an exhaustive minimax search.
//!
//! # Architecture
//!
//! - **Games**: board state, winner detection and move validation
//! - **Players**: the [`Player`] trait, its three strategies and [`minimax`]
//! - **Orchestrator**: the game loop and series tallies
//! - **Config**: TOML match configuration
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Game, Mark, Player, SmartPlayer};
//!
//! let game: Game = "XX OO    ".parse().unwrap();
//! let mut smart = SmartPlayer::new(Mark::X);
//! assert_eq!(smart.get_move(&game).unwrap(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod orchestrator;
mod players;

// Crate-level exports - Configuration
pub use config::{ConfigError, MatchConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{Board, CELL_COUNT, Game, Mark, MoveError, ParseGameError, Square};

// Crate-level exports - Players
pub use players::{
    HumanPlayer, LineSource, Player, PlayerError, PlayerKind, RandomPlayer, SearchResult,
    SmartPlayer, StdinReader, minimax,
};

// Crate-level exports - Orchestration
pub use orchestrator::{GameRecord, Orchestrator, Outcome, Tally};
