//! Configuration and playlist loading tests

use std::io::Write;
use stylus_console::{load_playlist, ConsoleConfig};
use stylus_playback::PlayMode;
use tempfile::NamedTempFile;

fn toml_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_from_file() {
    let file = toml_file(
        r#"
[playback]
play_mode = "random"
random_seed = 42

[log]
filter = "stylus_playback=debug"
"#,
    );

    let config = ConsoleConfig::load_with_prefix(Some(file.path()), "STYLUS_TEST_FILE").unwrap();

    assert_eq!(config.playback.play_mode, PlayMode::Random);
    assert_eq!(config.playback.random_seed, Some(42));
    assert_eq!(config.log.filter, "stylus_playback=debug");
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = toml_file(
        r#"
[playback]
play_mode = "loop"
"#,
    );

    let config =
        ConsoleConfig::load_with_prefix(Some(file.path()), "STYLUS_TEST_PARTIAL").unwrap();

    assert_eq!(config.playback.play_mode, PlayMode::Loop);
    assert_eq!(config.playback.random_seed, None);
    assert_eq!(config.log.filter, "stylus_playback=info,stylus_console=info");
}

#[test]
fn test_environment_overrides_file() {
    let file = toml_file(
        r#"
[playback]
play_mode = "loop"
"#,
    );
    std::env::set_var("STYLUS_TEST_ENV_PLAYBACK__PLAY_MODE", "repeat");
    std::env::set_var("STYLUS_TEST_ENV_PLAYBACK__RANDOM_SEED", "7");

    let config = ConsoleConfig::load_with_prefix(Some(file.path()), "STYLUS_TEST_ENV").unwrap();

    std::env::remove_var("STYLUS_TEST_ENV_PLAYBACK__PLAY_MODE");
    std::env::remove_var("STYLUS_TEST_ENV_PLAYBACK__RANDOM_SEED");

    assert_eq!(config.playback.play_mode, PlayMode::Repeat);
    assert_eq!(config.playback.random_seed, Some(7));
}

#[test]
fn test_invalid_play_mode_is_rejected() {
    let file = toml_file(
        r#"
[playback]
play_mode = "shuffle"
"#,
    );

    let result = ConsoleConfig::load_with_prefix(Some(file.path()), "STYLUS_TEST_INVALID");
    assert!(result.is_err());
}

#[test]
fn test_validate_rejects_missing_playlist() {
    let mut config = ConsoleConfig::default();
    config.playlist = Some("/nonexistent/playlist.json".into());

    assert!(config.validate().is_err());
}

#[test]
fn test_load_playlist() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"id": "1", "uri": "/music/one.mp3", "title": "One", "artist": "A"}},
            {{"id": "2", "uri": "/music/two.mp3", "title": "Two", "artist": "B",
              "album": "Second", "artwork": "/art/two.jpg"}}
        ]"#
    )
    .unwrap();

    let tracks = load_playlist(file.path()).unwrap();

    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].id, "1");
    assert_eq!(tracks[0].album, None);
    assert_eq!(tracks[1].album.as_deref(), Some("Second"));
    assert_eq!(tracks[1].artwork.as_deref(), Some("/art/two.jpg"));

    let mut config = ConsoleConfig::default();
    config.playlist = Some(file.path().to_path_buf());
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_playlist_rejects_malformed_json() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{ not a playlist").unwrap();

    let err = load_playlist(file.path()).unwrap_err();
    assert!(err.to_string().contains("failed to parse playlist"));
}
