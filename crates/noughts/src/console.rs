//! Line-oriented console front end for the engine.
//!
//! The console owns no game rules: it parses input into [`Coord`]s, calls
//! the engine, and renders whatever state the engine reports back.

use anyhow::{Context, Result};
use noughts_core::{Coord, GameEngine, MoveOutcome, Rejection, Snapshot};
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::{debug, instrument, warn};

/// How game state is written after each input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Board drawing plus prose messages.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// What the caller should do after an input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep reading input.
    Continue,
    /// Stop; the player asked to quit.
    Quit,
}

#[derive(Debug, Serialize)]
struct JsonEvent<'a> {
    event: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
    snapshot: Snapshot,
}

/// Drives one [`GameEngine`] from text commands.
///
/// Accepted commands: `row,column` (or `row column`), `reset`, `quit`.
pub struct Console<W> {
    game: GameEngine,
    out: W,
    format: OutputFormat,
}

impl<W: Write> Console<W> {
    /// Wraps a game and an output sink.
    pub fn new(game: GameEngine, out: W, format: OutputFormat) -> Self {
        Self { game, out, format }
    }

    /// The game being driven.
    pub fn game(&self) -> &GameEngine {
        &self.game
    }

    /// Consumes the console, returning the output sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Plays each scripted command in order, then stops.
    #[instrument(skip_all, fields(count = commands.len()))]
    pub fn run_script<S: AsRef<str>>(&mut self, commands: &[S]) -> Result<()> {
        self.announce("start", None)?;
        for command in commands {
            if self.handle_line(command.as_ref())? == Control::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Reads commands from `input` until `quit` or end of input.
    #[instrument(skip_all)]
    pub fn run_interactive<R: BufRead>(&mut self, input: R) -> Result<()> {
        self.announce("start", None)?;
        // Undecodable bytes become U+FFFD and are reported as an invalid move.
        for line in input.split(b'\n') {
            let bytes = line.context("Failed to read input")?;
            let line = String::from_utf8_lossy(&bytes);
            if self.handle_line(&line)? == Control::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Handles a single command.
    #[instrument(skip(self))]
    pub fn handle_line(&mut self, line: &str) -> Result<Control> {
        let command = line.trim();
        match command.to_ascii_lowercase().as_str() {
            "" => Ok(Control::Continue),
            "quit" | "exit" => {
                debug!("Quit requested");
                Ok(Control::Quit)
            }
            "reset" => {
                self.game.reset_game();
                self.announce("reset", Some("New game.".to_string()))?;
                Ok(Control::Continue)
            }
            _ => {
                match command.parse::<Coord>() {
                    Ok(coord) => {
                        self.play(coord)?;
                    }
                    Err(err) => {
                        warn!(input = command, error = %err, "Unparseable move");
                        let detail = format!("Invalid move {:?}: {}", command, err.message);
                        self.announce("invalid", Some(detail))?;
                    }
                }
                Ok(Control::Continue)
            }
        }
    }

    /// Plays the active player's marker at `coord` and reports the result.
    pub fn play(&mut self, coord: Coord) -> Result<MoveOutcome> {
        let name = self.game.active_player().name().to_string();
        if self.format == OutputFormat::Text {
            writeln!(
                self.out,
                "Placing {}'s marker into cell ({}, {})...",
                name,
                coord.row(),
                coord.column()
            )?;
        }

        let outcome = self.game.play(coord);
        match &outcome {
            MoveOutcome::Continue => self.announce("move", None)?,
            MoveOutcome::Won(_) | MoveOutcome::Draw => {
                let status = self.game.status().to_string();
                self.announce("finished", Some(status))?
            }
            MoveOutcome::Rejected(rejection) => {
                let detail = match rejection {
                    Rejection::GameOver => {
                        format!("{}. Type 'reset' to play again or 'quit' to exit.", rejection)
                    }
                    Rejection::CellOccupied(_) => format!("{}. Still {}'s turn.", rejection, name),
                };
                self.announce("rejected", Some(detail))?
            }
        }
        Ok(outcome)
    }

    fn announce(&mut self, event: &str, detail: Option<String>) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                let event = JsonEvent {
                    event,
                    detail,
                    snapshot: self.game.snapshot(),
                };
                let line = serde_json::to_string(&event).context("Failed to serialize snapshot")?;
                writeln!(self.out, "{}", line)?;
            }
            OutputFormat::Text => {
                if let Some(detail) = &detail
                    && event != "finished"
                {
                    writeln!(self.out, "{}", detail)?;
                }
                if event == "invalid" || event == "rejected" {
                    return Ok(());
                }
                writeln!(self.out, "{}", self.game.board())?;
                if self.game.status().is_terminal() {
                    writeln!(self.out, "{}", self.game.status())?;
                } else {
                    writeln!(self.out, "{}'s turn.", self.game.active_player().name())?;
                }
            }
        }
        self.out.flush()?;
        Ok(())
    }
}
