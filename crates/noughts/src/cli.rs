//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Noughts - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML file with player names (falls back to NOUGHTS_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Name of the player who moves first (X)
    #[arg(long, global = true)]
    pub player_one: Option<String>,

    /// Name of the player who moves second (O)
    #[arg(long, global = true)]
    pub player_two: Option<String>,

    /// Print a JSON snapshot after each command instead of the board
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a scripted list of moves, e.g. `noughts play 0,0 1,1 0,1`
    Play {
        /// Moves as `row,column` (0-2); `reset` and `quit` are also accepted
        #[arg(required = true)]
        moves: Vec<String>,
    },

    /// Read moves from stdin, one `row,column` per line
    Interactive,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play() {
        let args = ["noughts", "play", "0,0", "1,1", "--player-one", "Alice"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.player_one.as_deref(), Some("Alice"));
        assert!(!cli.json);
        match cli.command {
            Command::Play { moves } => assert_eq!(moves, vec!["0,0", "1,1"]),
            Command::Interactive => panic!("expected play"),
        }
    }

    #[test]
    fn test_play_requires_moves() {
        assert!(Cli::try_parse_from(["noughts", "play"]).is_err());
    }

    #[test]
    fn test_parse_interactive_json() {
        let cli = Cli::try_parse_from(["noughts", "--json", "interactive"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Command::Interactive));
    }
}
