//! Tests for loading player configuration from disk.

use noughts::GameConfig;
use std::ffi::OsString;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Create temp file");
    file.write_all(content.as_bytes()).expect("Write config");
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config("player_one = \"Alice\"\nplayer_two = \"Bob\"\n");
    let config = GameConfig::from_file(file.path()).expect("Valid config");
    assert_eq!(config, GameConfig::new("Alice", "Bob"));
}

#[test]
fn test_resolve_prefers_explicit_path() {
    let file = write_config("player_two = \"Bob\"\n");
    let config = GameConfig::resolve(Some(file.path())).expect("Valid config");
    assert_eq!(config.player_one(), "Player One");
    assert_eq!(config.player_two(), "Bob");
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("Create temp dir");
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_malformed_toml_is_an_error() {
    let file = write_config("player_one = ");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_blank_name_is_rejected() {
    let file = write_config("player_one = \"  \"\n");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert_eq!(err.message, "Player names must not be empty");
}

#[test]
fn test_cli_overrides_win_over_file() {
    let file = write_config("player_one = \"Alice\"\nplayer_two = \"Bob\"\n");
    let config = GameConfig::from_file(file.path())
        .expect("Valid config")
        .with_overrides(Some("Carol".to_string()), None);
    let game = config.new_game();
    assert_eq!(game.players()[0].name(), "Carol");
    assert_eq!(game.players()[1].name(), "Bob");
}

#[test]
fn test_resolve_uses_env_path() {
    let file = write_config("player_one = \"Alice\"\n");
    let env_path = Some(file.path().as_os_str().to_owned());
    let config = GameConfig::resolve_with(None, env_path).expect("Valid config");
    assert_eq!(config, GameConfig::new("Alice", "Player Two"));
}

#[test]
fn test_explicit_path_beats_env_path() {
    let explicit = write_config("player_one = \"Alice\"\n");
    let from_env = write_config("player_one = \"Carol\"\n");
    let env_path = Some(from_env.path().as_os_str().to_owned());
    let config = GameConfig::resolve_with(Some(explicit.path()), env_path).expect("Valid config");
    assert_eq!(config.player_one(), "Alice");
}

#[test]
fn test_empty_env_path_falls_back_to_defaults() {
    let config = GameConfig::resolve_with(None, Some(OsString::new())).expect("Defaults");
    assert_eq!(config, GameConfig::default());
}
