//! Portal role slugs.
//!
//! Roles drive both route access and which dashboard a user lands on.
//! The backend and the persisted `userRole` key exchange roles as
//! lowercase slugs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The three portal roles.
///
/// [`Role::Student`] is the default everywhere a role is absent or
/// unrecognized, matching what the portal has always assumed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Teacher,
    Admin,
}

/// Raised when a role slug is not one of `student`, `teacher`, `admin`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role slug: {0}")]
pub struct ParseRoleError(pub String);

impl Role {
    /// All roles, in escalation order.
    pub const ALL: [Role; 3] = [Role::Student, Role::Teacher, Role::Admin];

    /// The lowercase slug exchanged with the backend and persisted
    /// under `userRole`.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Admin => "admin",
        }
    }

    /// Parses a role slug, falling back to [`Role::Student`] for
    /// anything unrecognized.
    #[must_use]
    pub fn parse_lenient(slug: &str) -> Role {
        slug.parse().unwrap_or_default()
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "teacher" => Ok(Role::Teacher),
            "admin" => Ok(Role::Admin),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
