//! Port traits (interfaces) for external collaborators
//!
//! These traits define the boundaries between the classification core and
//! the repository host (GitHub). The core depends only on these traits,
//! never on concrete implementations.
//!
//! Implementations live in the `github` module.
//!
//! ## Design Principle
//!
//! - **Testability**: mock implementations for unit tests
//! - **Flexibility**: swap hosts without changing the pipeline
//! - **Clarity**: each trait covers one collaborator contract

mod changes;
mod content;
mod languages;
mod permissions;
mod pulls;
mod status;

pub use changes::ChangeLister;
pub use content::ContentFetcher;
pub use languages::LanguageInventory;
pub use permissions::PermissionChecker;
pub use pulls::PullRequestReader;
pub use status::StatusReporter;

/// Everything the event pipeline needs from a repository host
///
/// Blanket-implemented for any type providing all collaborator contracts.
pub trait RepositoryHost:
    ContentFetcher
    + ChangeLister
    + LanguageInventory
    + PermissionChecker
    + PullRequestReader
    + StatusReporter
{
}

impl<T> RepositoryHost for T where
    T: ContentFetcher
        + ChangeLister
        + LanguageInventory
        + PermissionChecker
        + PullRequestReader
        + StatusReporter
{
}
