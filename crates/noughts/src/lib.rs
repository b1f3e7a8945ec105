//! Console driver for the noughts tic-tac-toe engine.
//!
//! - **Config**: player names from TOML, `NOUGHTS_CONFIG` or defaults.
//! - **Console**: turns text commands into engine calls and renders the
//!   resulting state as text or JSON.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;

pub use config::{CONFIG_ENV, ConfigError, GameConfig};
pub use console::{Console, Control, OutputFormat};
