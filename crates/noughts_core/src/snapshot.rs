//! Owned, serializable view of a game for renderers.

use crate::board::Grid;
use crate::{GameStatus, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Everything a renderer needs after a call into the engine.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Row-major cells.
    grid: Grid,
    /// Player whose turn it is (or who ended the game).
    active_player: Player,
    /// Game status.
    status: GameStatus,
    /// Number of moves applied so far.
    moves_played: usize,
}

impl Snapshot {
    pub(crate) fn new(
        grid: Grid,
        active_player: Player,
        status: GameStatus,
        moves_played: usize,
    ) -> Self {
        Self {
            grid,
            active_player,
            status,
            moves_played,
        }
    }
}
