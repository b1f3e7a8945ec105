//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::{Board, GameEngine};

/// Invariant: board cells are monotonic (never overwritten).
///
/// Replaying the move history onto an empty board must never land on an
/// occupied cell and must reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<GameEngine> for MonotonicBoardInvariant {
    fn holds(game: &GameEngine) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            if !reconstructed.place(mov.coord, mov.marker) {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
