//! Bot and repository configuration
//!
//! Two layers:
//! - `BotConfig` - the bot's own settings, TOML on disk next to the
//!   process (`testkeeper.toml`), serde defaults throughout.
//! - `RepoTestConfig` - the per-repository `test-keeper.yaml` fetched from
//!   the repo at the commit under check. Parsed fail-soft: any problem
//!   means "no custom pattern".

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Default bot configuration file name, looked up in the working directory
pub const DEFAULT_BOT_CONFIG: &str = "testkeeper.toml";

/// Environment variable consulted for the GitHub API token
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Errors loading the bot configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("cannot read config file {path}")]
    Io {
        /// The path that failed
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML
    #[error("invalid config file {path}")]
    Parse {
        /// The path that failed
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },
}

/// Bot configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BotConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// GitHub API settings
    #[serde(default)]
    pub github: GithubConfig,
    /// Plugin behavior settings
    #[serde(default)]
    pub plugins: PluginConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address to bind
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8888
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
        }
    }
}

/// GitHub API settings
#[derive(Debug, Clone, Deserialize)]
pub struct GithubConfig {
    /// API base URL (override for GitHub Enterprise)
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// API token; the `GITHUB_TOKEN` environment variable wins over this
    #[serde(default)]
    pub token: Option<String>,
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            token: None,
        }
    }
}

/// Plugin behavior settings
#[derive(Debug, Clone, Deserialize)]
pub struct PluginConfig {
    /// Per-repository configuration file fetched at the commit revision
    #[serde(default = "default_config_file")]
    pub config_file: String,
    /// Comment command that requests approval without tests
    #[serde(default = "default_skip_comment")]
    pub skip_comment: String,
}

fn default_config_file() -> String {
    "test-keeper.yaml".to_string()
}

fn default_skip_comment() -> String {
    "/ok-without-tests".to_string()
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            config_file: default_config_file(),
            skip_comment: default_skip_comment(),
        }
    }
}

impl BotConfig {
    /// Load configuration from an explicit path
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from the default location, or fall back to defaults
    ///
    /// A missing default file is normal (everything has a default or comes
    /// from the environment); a present-but-broken file is an error.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        let path = Path::new(DEFAULT_BOT_CONFIG);
        if path.exists() { Self::load(path) } else { Ok(Self::default()) }
    }

    /// Resolve the API token: environment first, then config file
    #[must_use]
    pub fn token(&self) -> Option<String> {
        std::env::var(TOKEN_ENV).ok().filter(|t| !t.is_empty()).or_else(|| {
            self.github.token.clone().filter(|t| !t.is_empty())
        })
    }
}

/// Per-repository test-keeper configuration (`test-keeper.yaml`)
///
/// One recognized key: `test_pattern`, a regular-expression string.
/// Absence of the file, the key, or a usable value all mean "no custom
/// pattern".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepoTestConfig {
    /// Custom test-file pattern overriding language inference
    #[serde(default)]
    pub test_pattern: Option<String>,
}

impl RepoTestConfig {
    /// Parse YAML content, degrading to defaults on any parse failure
    #[must_use]
    pub fn from_yaml(content: &str) -> Self {
        let mut config = match serde_yaml_ng::from_str::<Self>(content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("unparseable test-keeper config, ignoring it: {err}");
                Self::default()
            },
        };
        if config.test_pattern.as_deref().is_some_and(|p| p.trim().is_empty()) {
            config.test_pattern = None;
        }
        config
    }
}
