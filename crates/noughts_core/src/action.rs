//! Moves and their outcomes.
//!
//! Moves are domain events: every applied move is recorded in the engine's
//! history so the invariants can replay it.

use crate::{Coord, Marker, Player};
use serde::{Deserialize, Serialize};

/// A marker placed at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Marker that was placed.
    pub marker: Marker,
    /// Where it was placed.
    pub coord: Coord,
}

impl Move {
    /// Creates a new move.
    pub fn new(marker: Marker, coord: Coord) -> Self {
        Self { marker, coord }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.marker, self.coord)
    }
}

/// Why a move was ignored.
///
/// Rejections are not failures: the engine state is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// The game already has a winner or ended in a draw.
    #[display("Game is already over")]
    GameOver,

    /// The target cell already holds a marker.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Coord),
}

/// What a call to `play` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Marker placed; the other player is now active.
    Continue,
    /// Marker placed and it completed a line.
    Won(Player),
    /// Marker placed into the last empty cell without completing a line.
    Draw,
    /// Nothing changed.
    Rejected(Rejection),
}

impl MoveOutcome {
    /// True if the move changed the board.
    pub fn is_applied(&self) -> bool {
        !matches!(self, MoveOutcome::Rejected(_))
    }
}
