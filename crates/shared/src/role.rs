//! Session role types

use crate::UnknownRoleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Session-level classification of the current user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular ticket submitter
    User,
    /// Support staff working tickets
    Support,
    /// Administrator
    Admin,
}

impl Role {
    /// All known roles, least privileged first
    pub const ALL: [Role; 3] = [Role::User, Role::Support, Role::Admin];

    /// Lowercase identifier used in session files and flags
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Support => "support",
            Role::Admin => "admin",
        }
    }

    /// Whether edit controls are restricted for this role
    pub fn is_restricted(&self) -> bool {
        matches!(self, Role::User)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user" => Ok(Role::User),
            "support" => Ok(Role::Support),
            "admin" => Ok(Role::Admin),
            _ => Err(UnknownRoleError {
                value: s.to_string(),
            }),
        }
    }
}
