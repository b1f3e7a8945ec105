//! Turn-taking state machine for tic-tac-toe.

use crate::action::{Move, MoveOutcome, Rejection};
use crate::invariants::{GameInvariants, InvariantSet};
use crate::rules;
use crate::snapshot::Snapshot;
use crate::{Board, Coord, GameStatus, Marker, Player};
use tracing::{debug, info, instrument};

/// Default name of the player who moves first.
pub const DEFAULT_FIRST_PLAYER: &str = "Player One";
/// Default name of the player who moves second.
pub const DEFAULT_SECOND_PLAYER: &str = "Player Two";

/// Tic-tac-toe game engine.
///
/// Owns the board, the two players and the game status. Illegal moves
/// (occupied cell, game already over) are ignored rather than reported as
/// errors; the returned [`MoveOutcome`] says which case applied.
///
/// ```text
/// [InProgress] --line completed--------------> [Won]
/// [InProgress] --last cell filled, no line----> [Draw]
/// [InProgress] --any other legal move---------> [InProgress] (turn passes)
/// [Won]/[Draw] --reset_game-------------------> [InProgress]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(crate) board: Board,
    pub(crate) players: [Player; 2],
    pub(crate) active: usize,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move>,
}

impl GameEngine {
    /// Creates a game between two named players.
    ///
    /// The first player places `X` and moves first; the second places `O`.
    #[instrument(skip_all)]
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        let players = [Player::new(first, Marker::X), Player::new(second, Marker::O)];
        debug!(first = %players[0], second = %players[1], "New game");
        Self {
            board: Board::new(),
            players,
            active: 0,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Both players, in turn order.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Player who moves first after construction or reset.
    pub fn first_player(&self) -> &Player {
        &self.players[0]
    }

    /// Player whose move is currently legal.
    ///
    /// After a win this is the winner; after a draw, whoever filled the last
    /// cell.
    pub fn active_player(&self) -> &Player {
        &self.players[self.active]
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Moves applied since construction or the last reset, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Plays the active player's marker at `(row, column)`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside `[0, 2]`. Callers taking
    /// untrusted input should build a [`Coord`] and use [`GameEngine::play`].
    #[track_caller]
    pub fn play_move(&mut self, row: usize, column: usize) -> MoveOutcome {
        match Coord::new(row, column) {
            Ok(coord) => self.play(coord),
            Err(err) => panic!("play_move out of range: {}", err.message),
        }
    }

    /// Plays the active player's marker at `coord`.
    ///
    /// Checked in order: the game must still be in progress, then the cell
    /// must be empty. Either failure leaves the engine untouched. A legal
    /// move is checked for a win first, then for a full board; only if
    /// neither applies does the turn pass.
    #[instrument(skip(self), fields(player = %self.active_player()))]
    pub fn play(&mut self, coord: Coord) -> MoveOutcome {
        if self.status.is_terminal() {
            debug!(status = %self.status, "Move after game over ignored");
            return MoveOutcome::Rejected(Rejection::GameOver);
        }

        let marker = self.active_player().marker();
        if !self.board.place(coord, marker) {
            debug!("Move onto occupied cell ignored");
            return MoveOutcome::Rejected(Rejection::CellOccupied(coord));
        }
        self.history.push(Move::new(marker, coord));

        let outcome = if rules::completes_line(&self.board, coord, marker) {
            let winner = self.active_player().clone();
            info!(winner = %winner, moves = self.history.len(), "Game won");
            self.status = GameStatus::Won(winner.clone());
            MoveOutcome::Won(winner)
        } else if rules::is_full(&self.board) {
            info!("Game drawn");
            self.status = GameStatus::Draw;
            MoveOutcome::Draw
        } else {
            self.switch_player_turn();
            MoveOutcome::Continue
        };

        debug_assert!(
            GameInvariants::check_all(self).is_ok(),
            "Game invariants violated after {}",
            coord
        );
        outcome
    }

    /// Hands the turn to the other player.
    fn switch_player_turn(&mut self) {
        self.active = 1 - self.active;
        debug!(next = %self.active_player(), "Turn passes");
    }

    /// Starts a new game with the same players.
    ///
    /// The engine is afterwards equal to a freshly constructed one.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.board.reset();
        self.active = 0;
        self.status = GameStatus::InProgress;
        self.history.clear();
        debug!("Game reset");
    }

    /// Owned view of everything a renderer needs.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            self.board.grid(),
            self.active_player().clone(),
            self.status.clone(),
            self.history.len(),
        )
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(DEFAULT_FIRST_PLAYER, DEFAULT_SECOND_PLAYER)
    }
}
