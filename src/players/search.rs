//! Exhaustive minimax search over tic-tac-toe positions.
//!
//! Scores are from the point of view of `max_player`. A win found with `n`
//! empty cells left is worth `n + 1`, a loss `-(n + 1)`, and a draw `0`, so
//! quicker wins and slower losses are preferred among otherwise equal lines.
//! The tree is searched without pruning. Each simulated move is applied to a
//! copy of the game state, leaving the caller's state untouched.

use crate::games::tictactoe::{Game, Mark};

/// Best move found at one level of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Cell leading to `score`, or `None` at a terminal state.
    pub position: Option<usize>,
    /// Minimax value for the maximizing mark.
    pub score: i32,
}

impl SearchResult {
    fn terminal(score: i32) -> Self {
        Self {
            position: None,
            score,
        }
    }
}

/// Evaluates `state` with `player` to move, maximizing for `max_player`.
///
/// Available cells are tried in ascending order and a candidate replaces the
/// running best only when strictly better, so among equal scores the
/// lowest cell wins.
pub fn minimax(state: &Game, player: Mark, max_player: Mark) -> SearchResult {
    let other_player = player.opponent();

    // The previous move was made by `other_player`.
    if state.current_winner() == Some(other_player) {
        let magnitude = state.num_empty_squares() as i32 + 1;
        return SearchResult::terminal(if other_player == max_player {
            magnitude
        } else {
            -magnitude
        });
    }
    if !state.has_empty_squares() {
        return SearchResult::terminal(0);
    }

    let maximizing = player == max_player;
    let mut best = SearchResult::terminal(if maximizing { i32::MIN } else { i32::MAX });

    for cell in state.available_moves() {
        let mut next = *state;
        next.place(cell, player);

        let mut candidate = minimax(&next, other_player, max_player);
        candidate.position = Some(cell);

        let improves = if maximizing {
            candidate.score > best.score
        } else {
            candidate.score < best.score
        };
        if improves {
            best = candidate;
        }
    }

    best
}
