//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use testkeeper::output::OutputMode;

use super::commands;

/// testkeeper - gate pull requests on the presence of test files
#[derive(Parser, Debug)]
#[command(
    name = "testkeeper",
    version,
    about = "Gate pull requests on the presence of test files",
    long_about = "A GitHub webhook bot that posts a commit status for every pull request:\n\
                  success when the changed files include tests (per repository\n\
                  configuration or language-aware defaults), failure otherwise.\n\
                  Admins can approve without tests via a PR comment command."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to the bot configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the webhook server
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Classify a single commit and print the decision
    Check {
        /// Repository slug (owner/name)
        repo: String,

        /// Commit SHA to classify
        sha: String,
    },

    /// Show version
    Version,
}

/// Parse arguments, initialize logging, and dispatch
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let mode = if cli.json { OutputMode::Json } else { OutputMode::Human };

    match cli.command {
        Some(Command::Serve { port }) => commands::serve::execute(cli.config.as_deref(), port),
        Some(Command::Check { repo, sha }) => {
            commands::check::execute(cli.config.as_deref(), &repo, &sha, mode)
        },
        Some(Command::Version) | None => {
            println!("testkeeper v{}", testkeeper::VERSION);
            Ok(())
        },
    }
}
