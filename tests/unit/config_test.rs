//! Tests for bot configuration loading

use std::io::Write as _;

use testkeeper::config::{BotConfig, ConfigError};

#[test]
fn loads_full_config_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[server]
bind = "127.0.0.1"
port = 9999

[github]
api_url = "https://github.example.com/api/v3"
token = "file-token"

[plugins]
config_file = "keeper.yaml"
skip_comment = "/skip"
"#
    )
    .unwrap();

    let config = BotConfig::load(file.path()).unwrap();
    assert_eq!(config.server.bind, "127.0.0.1");
    assert_eq!(config.server.port, 9999);
    assert_eq!(config.github.api_url, "https://github.example.com/api/v3");
    assert_eq!(config.plugins.config_file, "keeper.yaml");
    assert_eq!(config.plugins.skip_comment, "/skip");
}

#[test]
fn missing_explicit_path_is_an_error() {
    let err = BotConfig::load(std::path::Path::new("/nonexistent/testkeeper.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn broken_toml_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "this is [not toml").unwrap();
    let err = BotConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn empty_file_yields_defaults() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let config = BotConfig::load(file.path()).unwrap();
    assert_eq!(config.server.port, 8888);
    assert_eq!(config.plugins.skip_comment, "/ok-without-tests");
}
