//! Tests for the console driver.

use noughts::{Console, GameConfig, OutputFormat};
use noughts_core::{GameStatus, Marker};
use std::io::Cursor;

fn console(format: OutputFormat) -> Console<Vec<u8>> {
    Console::new(GameConfig::new("Alice", "Bob").new_game(), Vec::new(), format)
}

fn text(console: Console<Vec<u8>>) -> String {
    String::from_utf8(console.into_inner()).expect("UTF-8 output")
}

#[test]
fn test_script_to_win() {
    let mut console = console(OutputFormat::Text);
    console
        .run_script(&["0,0", "1,1", "0,1", "2,2", "0,2"])
        .expect("Script runs");

    assert_eq!(console.game().status().winner().map(|p| p.name()), Some("Alice"));
    let out = text(console);
    assert!(out.starts_with(".|.|.\n-+-+-\n.|.|.\n-+-+-\n.|.|.\nAlice's turn.\n"));
    assert!(out.contains("Placing Bob's marker into cell (1, 1)..."));
    assert!(out.contains("X|X|X\n-+-+-\n.|O|.\n-+-+-\n.|.|O\nAlice wins!\n"));
}

#[test]
fn test_script_reports_occupied_cell() {
    let mut console = console(OutputFormat::Text);
    console.run_script(&["0,0", "0,0"]).expect("Script runs");

    assert_eq!(console.game().history().len(), 1);
    assert_eq!(console.game().active_player().marker(), Marker::O);
    assert!(text(console).contains("Cell (0, 0) is already occupied. Still Bob's turn."));
}

#[test]
fn test_script_stops_at_quit() {
    let mut console = console(OutputFormat::Text);
    console.run_script(&["0,0", "quit", "1,1"]).expect("Script runs");
    assert_eq!(console.game().history().len(), 1);
}

#[test]
fn test_interactive_draw_then_reset() {
    let input = "0,0\n0 1\n0,2\n1,1\n1,0\n1,2\n2,1\n2,0\n2,2\n1,1\nreset\n";
    let mut console = console(OutputFormat::Text);
    console.run_interactive(Cursor::new(input)).expect("Session runs");

    assert_eq!(console.game().status(), &GameStatus::InProgress);
    assert!(console.game().history().is_empty());
    let out = text(console);
    assert!(out.contains("It's a draw!"));
    assert!(out.contains("Game is already over. Type 'reset' to play again or 'quit' to exit."));
    assert!(out.contains("New game."));
}

#[test]
fn test_interactive_skips_garbage() {
    let mut console = console(OutputFormat::Text);
    console
        .run_interactive(Cursor::new("hello\n3,0\n\n1,1\n"))
        .expect("Session runs");

    assert_eq!(console.game().history().len(), 1);
    let out = text(console);
    assert!(out.contains("Invalid move \"hello\""));
    assert!(out.contains("Invalid move \"3,0\""));
}

#[test]
fn test_interactive_survives_invalid_utf8() {
    let mut console = console(OutputFormat::Text);
    console
        .run_interactive(Cursor::new(&b"0,0\n\xff\xfe\n1,1\n"[..]))
        .expect("Session runs");

    assert_eq!(console.game().history().len(), 2);
    let out = text(console);
    assert!(out.contains("Invalid move \"\u{fffd}\u{fffd}\""));
    assert!(out.ends_with("Alice's turn.\n"));
}

#[test]
fn test_json_output_is_one_event_per_line() {
    let mut console = console(OutputFormat::Json);
    console.run_script(&["1,1", "1,1", "nope"]).expect("Script runs");

    let out = text(console);
    let events: Vec<serde_json::Value> = out
        .lines()
        .map(|line| serde_json::from_str(line).expect("JSON line"))
        .collect();

    let names: Vec<_> = events.iter().map(|e| e["event"].as_str().unwrap_or_default()).collect();
    assert_eq!(names, vec!["start", "move", "rejected", "invalid"]);
    assert_eq!(events[1]["snapshot"]["grid"][1][1]["Occupied"], "X");
    assert_eq!(events[1]["snapshot"]["active_player"]["name"], "Bob");
    assert_eq!(events[1]["snapshot"]["moves_played"], 1);
    assert!(events[0].get("detail").is_none());
}
