//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use strictly_minimax::PlayerKind;

/// Strictly Minimax - tic-tac-toe against human, random or perfect players
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Tic-tac-toe with a perfect-play minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a single game, printing the board after every move
    Play {
        /// Strategy for X (overrides the config file)
        #[arg(long, value_enum)]
        x: Option<PlayerKind>,

        /// Strategy for O (overrides the config file)
        #[arg(long, value_enum)]
        o: Option<PlayerKind>,

        /// Path to a TOML match configuration
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Seed for reproducible random choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play a series of computer games and print the tally
    Simulate {
        /// Strategy for X
        #[arg(long, value_enum, default_value = "random")]
        x: PlayerKind,

        /// Strategy for O
        #[arg(long, value_enum, default_value = "smart")]
        o: PlayerKind,

        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Seed for reproducible random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Print every game's transcript
        #[arg(long)]
        verbose: bool,
    },
}
