//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the engine and the invariant checks share one source of
//! truth.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, completes_line, line_owner, winner};
