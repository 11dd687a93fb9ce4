//! Human player that reads moves from a line-based input stream.

use super::{Player, PlayerError};
use crate::games::tictactoe::{Game, Mark};
use std::io::{self, BufRead, Stdin, Stdout, Write};
use tracing::{debug, instrument};

/// Message written when the entered line is not an available cell.
const INVALID_SQUARE: &str = "Invalid square. Try again.";

/// Source of input lines for a human player.
pub trait LineSource {
    /// Appends the next line to `buf`, returning the bytes read (0 at end of input).
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl<R: BufRead> LineSource for R {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Standard input, locked only while a line is being read.
///
/// Several human players can share the process's stdin this way.
pub struct StdinReader(Stdin);

impl StdinReader {
    /// Wraps the process's standard input.
    pub fn new() -> Self {
        Self(io::stdin())
    }
}

impl Default for StdinReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for StdinReader {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        self.0.read_line(buf)
    }
}

/// Human player prompting on `output` and reading cells from `input`.
pub struct HumanPlayer<R, W> {
    mark: Mark,
    name: String,
    input: R,
    output: W,
}

impl HumanPlayer<StdinReader, Stdout> {
    /// Creates a human player on standard input and output.
    pub fn stdio(mark: Mark) -> Self {
        Self::new(mark, StdinReader::new(), io::stdout())
    }
}

impl<R: LineSource, W: Write> HumanPlayer<R, W> {
    /// Creates a human player on the given streams.
    pub fn new(mark: Mark, input: R, output: W) -> Self {
        Self {
            mark,
            name: format!("Human {mark}"),
            input,
            output,
        }
    }

    /// Consumes the player, returning its output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: LineSource, W: Write> Player for HumanPlayer<R, W> {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(skip(self, game), fields(mark = %self.mark))]
    fn get_move(&mut self, game: &Game) -> Result<usize, PlayerError> {
        let available = game.available_moves();
        if available.is_empty() {
            return Err(PlayerError::NoAvailableMoves);
        }

        loop {
            write!(self.output, "{}'s turn. Input move (0-8): ", self.mark)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(PlayerError::InputClosed);
            }

            match line.trim().parse::<usize>() {
                Ok(cell) if available.contains(&cell) => return Ok(cell),
                _ => {
                    debug!(input = line.trim(), "Rejected human input");
                    writeln!(self.output, "{INVALID_SQUARE}")?;
                }
            }
        }
    }
}
