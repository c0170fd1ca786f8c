//! Command implementations

pub mod check;
pub mod serve;

use std::path::Path;

use testkeeper::config::BotConfig;

/// Load the bot configuration from the given path or the default location
pub fn load_config(path: Option<&Path>) -> anyhow::Result<BotConfig> {
    let config = match path {
        Some(path) => BotConfig::load(path)?,
        None => BotConfig::load_or_default()?,
    };
    Ok(config)
}
