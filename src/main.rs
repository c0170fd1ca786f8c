//! testkeeper - a GitHub webhook bot that gates pull requests on the
//! presence of test files
//!
//! The binary runs either as the long-lived webhook server (`serve`) or as
//! a one-shot classifier for a single commit (`check`).

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;
mod server;

/// Main entry point for the testkeeper bot
fn main() {
    if let Err(err) = cli::run() {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}
