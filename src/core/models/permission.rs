//! Repository permission levels
//!
//! Only `Admin` authorizes the approve-without-tests override.

use std::str::FromStr;

/// Permission level an actor holds on a repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermissionLevel {
    /// Full administrative access
    Admin,
    /// Push access
    Write,
    /// Pull access only
    Read,
    /// No access
    #[default]
    None,
}

impl PermissionLevel {
    /// Whether this level authorizes administrative override commands
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl FromStr for PermissionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "write" | "maintain" => Ok(Self::Write),
            "read" | "triage" => Ok(Self::Read),
            "none" => Ok(Self::None),
            _ => Err(format!("unknown permission level: {s}")),
        }
    }
}

impl std::fmt::Display for PermissionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Write => write!(f, "write"),
            Self::Read => write!(f, "read"),
            Self::None => write!(f, "none"),
        }
    }
}
