//! Game state and rules for tic-tac-toe.
//!
//! [`Game`] is the board-state collaborator the move strategies consume: it
//! owns the grid, remembers the mark that completed a line with the most
//! recent move, and answers queries about the cells still available.

use super::error::{MoveError, ParseGameError};
use super::types::{Board, CELL_COUNT, Mark, Square};
use std::str::FromStr;
use tracing::{debug, instrument};

/// Winning combinations.
#[rustfmt::skip]
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],             // Diagonals
];

/// Tic-tac-toe game state: the board plus the winner marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Game {
    board: Board,
    current_winner: Option<Mark>,
}

impl Game {
    /// Creates a new game with an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that completed a line with the most recent move, if any.
    pub fn current_winner(&self) -> Option<Mark> {
        self.current_winner
    }

    /// Returns the empty cells in ascending order.
    pub fn available_moves(&self) -> Vec<usize> {
        (0..CELL_COUNT).filter(|&cell| self.board.is_empty(cell)).collect()
    }

    /// Counts the empty cells.
    pub fn num_empty_squares(&self) -> usize {
        self.board
            .squares()
            .iter()
            .filter(|&&square| square == Square::Empty)
            .count()
    }

    /// Returns true while at least one cell is empty.
    pub fn has_empty_squares(&self) -> bool {
        self.board.squares().contains(&Square::Empty)
    }

    /// Returns true once the board is won or full.
    pub fn is_over(&self) -> bool {
        self.current_winner.is_some() || !self.has_empty_squares()
    }

    /// Places `mark` at `cell`, recording it as the winner if the move completes a line.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] for cells outside 0-8 and
    /// [`MoveError::SquareOccupied`] when the cell already holds a mark.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, cell: usize, mark: Mark) -> Result<(), MoveError> {
        match self.board.get(cell) {
            None => Err(MoveError::OutOfBounds(cell)),
            Some(Square::Occupied(_)) => Err(MoveError::SquareOccupied(cell)),
            Some(Square::Empty) => {
                self.place(cell, mark);
                if self.current_winner.is_some() {
                    debug!(%mark, cell, "Move completes a line");
                }
                Ok(())
            }
        }
    }

    /// Clears `cell` and the winner marker, reversing the last [`Game::make_move`].
    pub fn undo_move(&mut self, cell: usize) {
        self.board.set(cell, Square::Empty);
        self.current_winner = None;
    }

    /// Applies a move to an empty, in-range cell without validation.
    pub(crate) fn place(&mut self, cell: usize, mark: Mark) {
        self.board.set(cell, Square::Occupied(mark));
        if self.completes_line(cell, mark) {
            self.current_winner = Some(mark);
        }
    }

    /// Checks the lines running through `cell` for three of `mark`.
    fn completes_line(&self, cell: usize, mark: Mark) -> bool {
        let occupied = Some(Square::Occupied(mark));
        LINES
            .iter()
            .filter(|line| line.contains(&cell))
            .any(|line| line.iter().all(|&c| self.board.get(c) == occupied))
    }
}

/// Parses a nine-character snapshot such as `"XX OO    "`.
///
/// `X` and `O` are marks, a space or `.` is an empty cell. The winner marker
/// is set when the snapshot already contains a completed line.
impl FromStr for Game {
    type Err = ParseGameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let count = s.chars().count();
        if count != CELL_COUNT {
            return Err(ParseGameError::WrongLength(count));
        }

        let mut game = Game::new();
        for (cell, symbol) in s.chars().enumerate() {
            let square = match symbol {
                'X' | 'x' => Square::Occupied(Mark::X),
                'O' | 'o' => Square::Occupied(Mark::O),
                ' ' | '.' => Square::Empty,
                other => return Err(ParseGameError::UnknownSymbol(other)),
            };
            game.board.set(cell, square);
        }

        game.current_winner = LINES.iter().find_map(|&[a, b, c]| {
            match (game.board.get(a), game.board.get(b), game.board.get(c)) {
                (Some(Square::Occupied(m)), Some(sb), Some(sc))
                    if sb == Square::Occupied(m) && sc == Square::Occupied(m) =>
                {
                    Some(m)
                }
                _ => None,
            }
        });

        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_is_empty() {
        let game = Game::new();
        assert_eq!(game.available_moves(), (0..9).collect::<Vec<_>>());
        assert_eq!(game.num_empty_squares(), 9);
        assert!(game.has_empty_squares());
        assert_eq!(game.current_winner(), None);
    }

    #[test]
    fn test_make_move_rejects_occupied() {
        let mut game = Game::new();
        game.make_move(4, Mark::X).unwrap();
        assert_eq!(game.make_move(4, Mark::O), Err(MoveError::SquareOccupied(4)));
    }

    #[test]
    fn test_make_move_rejects_out_of_bounds() {
        let mut game = Game::new();
        assert_eq!(game.make_move(9, Mark::X), Err(MoveError::OutOfBounds(9)));
        assert_eq!(game, Game::new());
    }

    #[test]
    fn test_winner_column() {
        let mut game: Game = "X  X     ".parse().unwrap();
        assert_eq!(game.current_winner(), None);
        game.make_move(6, Mark::X).unwrap();
        assert_eq!(game.current_winner(), Some(Mark::X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut game: Game = "  O O    ".parse().unwrap();
        game.make_move(6, Mark::O).unwrap();
        assert_eq!(game.current_winner(), Some(Mark::O));
    }

    #[test]
    fn test_non_winning_move_leaves_marker_clear() {
        let mut game: Game = "XO X     ".parse().unwrap();
        game.make_move(8, Mark::X).unwrap();
        assert_eq!(game.current_winner(), None);
    }

    #[test]
    fn test_undo_restores_winning_move() {
        let before: Game = "XX OO    ".parse().unwrap();
        let mut game = before;
        game.make_move(2, Mark::X).unwrap();
        assert_eq!(game.current_winner(), Some(Mark::X));
        game.undo_move(2);
        assert_eq!(game, before);
    }

    #[test]
    fn test_parse_derives_winner() {
        let game: Game = "OOOXX.X..".parse().unwrap();
        assert_eq!(game.current_winner(), Some(Mark::O));
        assert!(game.is_over());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("XO".parse::<Game>(), Err(ParseGameError::WrongLength(2)));
        assert_eq!(
            "XO?      ".parse::<Game>(),
            Err(ParseGameError::UnknownSymbol('?'))
        );
    }
}
