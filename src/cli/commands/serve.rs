//! `serve` command - run the webhook server

use std::path::Path;

use crate::server;

/// Start the webhook server with optional port override
pub fn execute(config_path: Option<&Path>, port: Option<u16>) -> anyhow::Result<()> {
    let mut config = super::load_config(config_path)?;
    if let Some(port) = port {
        config.server.port = port;
    }
    server::serve(config)
}
