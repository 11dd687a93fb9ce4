//! Strictly Minimax - Unified CLI
//!
//! Plays tic-tac-toe between human, random and smart players.

#![warn(missing_docs)]

mod cli;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use std::io::{self, Write};
use std::path::PathBuf;
use strictly_minimax::{Mark, MatchConfig, Orchestrator, PlayerKind};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { x, o, config, seed } => run_play(x, o, config, seed),
        Command::Simulate {
            x,
            o,
            games,
            seed,
            verbose,
        } => run_simulate(x, o, games, seed, verbose),
    }
}

/// Play one game, optionally configured from a TOML file
#[instrument]
fn run_play(
    x: Option<PlayerKind>,
    o: Option<PlayerKind>,
    config_path: Option<PathBuf>,
    seed: Option<u64>,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => MatchConfig::from_file(path)?,
        None => MatchConfig::default(),
    };
    if let Some(kind) = x {
        config = config.with_x_player(kind);
    }
    if let Some(kind) = o {
        config = config.with_o_player(kind);
    }
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    run_match(&config)
}

/// Play a series between two computer players
#[instrument]
fn run_simulate(
    x: PlayerKind,
    o: PlayerKind,
    games: u32,
    seed: Option<u64>,
    verbose: bool,
) -> Result<()> {
    if x == PlayerKind::Human || o == PlayerKind::Human {
        bail!("simulate only runs computer players; use `play` for human games");
    }

    let mut config = MatchConfig::default()
        .with_x_player(x)
        .with_o_player(o)
        .with_games(games)
        .with_show_board(verbose);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    config.validate()?;

    run_match(&config)
}

#[instrument(skip(config))]
fn run_match(config: &MatchConfig) -> Result<()> {
    info!(x = %config.x_player(), o = %config.o_player(), games = config.games(), "Starting match");

    let player_x = config.x_player().build(Mark::X, config.x_seed());
    let player_o = config.o_player().build(Mark::O, config.o_seed());
    let mut orchestrator = Orchestrator::new(player_x, player_o)?;

    let tally = if *config.show_board() {
        let mut stdout = io::stdout();
        let tally = orchestrator.play_series(*config.games(), &mut stdout)?;
        stdout.flush()?;
        tally
    } else {
        orchestrator.play_series(*config.games(), &mut io::sink())?
    };

    if *config.games() > 1 || !config.show_board() {
        println!("{tally}");
    }
    Ok(())
}
