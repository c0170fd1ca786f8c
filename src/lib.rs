//! testkeeper - a GitHub webhook bot that gates pull requests on the
//! presence of test files
//!
//! This library provides the classification pipeline (which file-name
//! patterns govern a commit, does any changed file match), the gating state
//! machine that turns a verdict into a commit status, and the GitHub
//! adapter implementing the collaborator ports.

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

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod core;
pub mod github;
pub mod output;
pub mod webhook;
