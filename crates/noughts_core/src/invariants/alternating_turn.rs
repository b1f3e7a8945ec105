//! Alternating turn invariant: players take turns, first player first.

use super::Invariant;
use crate::GameEngine;

/// Invariant: players alternate.
///
/// History markers alternate starting with the first player's. While the
/// game is in progress the active player is the one due next; once it has
/// ended the active player is whoever made the final move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(game: &GameEngine) -> bool {
        let mut expected = game.first_player().marker();

        for mov in game.history() {
            if mov.marker != expected {
                return false;
            }
            expected = expected.opponent();
        }

        let active = game.active_player().marker();
        if game.status().is_terminal() {
            game.history().last().is_some_and(|last| last.marker == active)
        } else {
            active == expected
        }
    }

    fn description() -> &'static str {
        "Players alternate turns starting with the first player"
    }
}
