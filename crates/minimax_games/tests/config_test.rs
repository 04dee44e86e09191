//! Tests for loading configuration files.

use minimax_games::GameConfig;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "player_x_name = \"Ada\"\nplayer_o_name = \"Grace\"\nlog_filter = \"debug\"\nshow_scores = true"
    )
    .unwrap();

    let config = GameConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.player_x_name(), "Ada");
    assert_eq!(config.player_o_name(), "Grace");
    assert_eq!(config.ai_name(), "AI");
    assert_eq!(config.log_filter(), "debug");
    assert!(*config.show_scores());
}

#[test]
fn test_empty_file_uses_defaults() {
    let file = NamedTempFile::new().unwrap();
    assert_eq!(GameConfig::from_file(file.path()).unwrap(), GameConfig::default());
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_invalid_toml_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "show_scores = \"sometimes\"").unwrap();

    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error: "));
}
