//! Game orchestration between players.

use crate::games::tictactoe::{CELL_COUNT, Game, Mark};
use crate::players::Player;
use anyhow::{Context, Result, ensure};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::io::Write;
use tracing::{debug, info, instrument};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A mark completed a line.
    Won(Mark),
    /// The board filled up without a winner.
    Draw,
}

/// Result of one played game.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GameRecord {
    /// How the game ended.
    outcome: Outcome,
    /// Cells played, in order, starting with X.
    history: Vec<usize>,
    /// Final game state.
    game: Game,
}

/// Win/draw counts over a series of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    /// Counts one outcome.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won(Mark::X) => self.x_wins += 1,
            Outcome::Won(Mark::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Total games counted.
    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X wins: {}, O wins: {}, draws: {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator {
    game: Game,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    ///
    /// # Errors
    ///
    /// Fails when a player is bound to the wrong mark.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>) -> Result<Self> {
        ensure!(
            player_x.mark() == Mark::X,
            "{} cannot play X",
            player_x.name()
        );
        ensure!(
            player_o.mark() == Mark::O,
            "{} cannot play O",
            player_o.name()
        );
        Ok(Self {
            game: Game::new(),
            player_x,
            player_o,
        })
    }

    /// Returns the current game state.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        self.game = Game::new();
    }

    /// Runs the game loop from the current unfinished state, writing a
    /// transcript to `out`. X moves first.
    ///
    /// # Errors
    ///
    /// Fails when the game is already over (call [`restart`](Self::restart)
    /// first), when a player cannot move or returns an unavailable cell, or
    /// when the transcript cannot be written.
    #[instrument(skip_all, fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<GameRecord> {
        ensure!(
            !self.game.is_over(),
            "Game is already over; restart before running again"
        );
        info!("Starting game orchestration");
        writeln!(out, "{}\n", cell_guide())?;

        let mut history = Vec::new();
        let mut mark = Mark::X;

        while !self.game.is_over() {
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };

            debug!(player = %player.name(), "Waiting for move");
            let cell = player
                .get_move(&self.game)
                .with_context(|| format!("{} failed to move", player.name()))?;
            self.game
                .make_move(cell, mark)
                .with_context(|| format!("{} chose an illegal move", player.name()))?;
            history.push(cell);

            info!(%mark, cell, "Move made");
            writeln!(out, "{mark} makes a move to square {cell}")?;
            writeln!(out, "{}\n", self.game.board())?;

            if let Some(winner) = self.game.current_winner() {
                info!(%winner, "Game over");
                writeln!(out, "{winner} wins!")?;
                return Ok(self.record(Outcome::Won(winner), history));
            }

            mark = mark.opponent();
        }

        info!("Game drawn");
        writeln!(out, "It's a tie!")?;
        Ok(self.record(Outcome::Draw, history))
    }

    /// Plays `games` fresh games and tallies the outcomes.
    ///
    /// # Errors
    ///
    /// Propagates the first failing game.
    #[instrument(skip(self, out))]
    pub fn play_series<W: Write>(&mut self, games: u32, out: &mut W) -> Result<Tally> {
        let mut tally = Tally::default();
        for round in 1..=games {
            self.restart();
            let record = self
                .run(out)
                .with_context(|| format!("Game {round} of {games} failed"))?;
            tally.record(record.outcome);
        }
        info!(%tally, "Series finished");
        Ok(tally)
    }

    fn record(&self, outcome: Outcome, history: Vec<usize>) -> GameRecord {
        GameRecord {
            outcome,
            history,
            game: self.game,
        }
    }
}

/// Board labelled with the cell numbers used for input.
fn cell_guide() -> String {
    (0..CELL_COUNT)
        .map(|cell| cell.to_string())
        .collect::<Vec<_>>()
        .chunks(3)
        .map(|row| row.join("|"))
        .collect::<Vec<_>>()
        .join("\n-+-+-\n")
}
