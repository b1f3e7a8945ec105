//! Noughts - console tic-tac-toe.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use noughts::{Console, GameConfig, OutputFormat};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Game output owns stdout; logs go to stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = GameConfig::resolve(cli.config.as_deref())
        .context("Failed to load player configuration")?
        .with_overrides(cli.player_one, cli.player_two);
    info!(player_one = %config.player_one(), player_two = %config.player_two(), "Starting game");

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let mut console = Console::new(config.new_game(), std::io::stdout().lock(), format);

    match cli.command {
        Command::Play { moves } => console.run_script(&moves),
        Command::Interactive => console.run_interactive(std::io::stdin().lock()),
    }
}
