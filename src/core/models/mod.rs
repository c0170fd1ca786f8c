//! Domain types for the gating pipeline

mod changes;
mod commit;
mod permission;
mod pull;
mod status;

pub use changes::{AffectedFile, FileStatus};
pub use commit::{CommitRef, RepoRef};
pub use permission::PermissionLevel;
pub use pull::PullSnapshot;
pub use status::{CommitState, StatusDecision, Verdict};
