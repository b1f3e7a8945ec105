//! Pure tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Board**: fixed 3x3 grid of [`Cell`]s; a cell is written at most once
//!   per game.
//! - **GameEngine**: two [`Player`]s, the active player and the
//!   [`GameStatus`]; validates moves, detects wins and draws, passes turns.
//! - **Rules**: pure win/draw checks over a board.
//! - **Invariants**: properties re-checked after every move in debug builds.
//!
//! # Example
//!
//! ```
//! use noughts_core::{GameEngine, GameStatus};
//!
//! let mut game = GameEngine::new("Alice", "Bob");
//! for (row, column) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     game.play_move(row, column);
//! }
//! assert_eq!(game.status(), &GameStatus::Won(game.first_player().clone()));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod coord;
mod engine;
pub mod invariants;
pub mod rules;
mod snapshot;
mod types;

pub use action::{Move, MoveOutcome, Rejection};
pub use board::{Board, Grid};
pub use coord::{BOARD_SIZE, Coord, CoordError};
pub use engine::{DEFAULT_FIRST_PLAYER, DEFAULT_SECOND_PLAYER, GameEngine};
pub use snapshot::Snapshot;
pub use types::{Cell, GameStatus, Marker, Player};
