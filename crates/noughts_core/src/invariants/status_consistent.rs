//! Status consistency invariant: the status agrees with the board.

use super::Invariant;
use crate::rules::{is_full, winner};
use crate::{GameEngine, GameStatus};

/// Invariant: status is terminal iff a line is complete or the board is full.
///
/// A `Won` status must name the owner of a completed line, and `Draw`
/// requires a full board with no completed line.
pub struct StatusConsistentInvariant;

impl Invariant<GameEngine> for StatusConsistentInvariant {
    fn holds(game: &GameEngine) -> bool {
        let board = game.board();
        match game.status() {
            GameStatus::InProgress => winner(board).is_none() && !is_full(board),
            GameStatus::Won(player) => winner(board) == Some(player.marker()),
            GameStatus::Draw => is_full(board) && winner(board).is_none(),
        }
    }

    fn description() -> &'static str {
        "Status is terminal exactly when a line is complete or the board is full"
    }
}
