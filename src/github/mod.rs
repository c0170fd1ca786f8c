//! GitHub adapter
//!
//! Concrete implementations of the core port traits against the GitHub
//! REST API.

mod client;

pub use client::GithubClient;
