//! Session context and file loading

use crate::{RenderedTicket, Role, TicketViewError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Carrier of the current session role
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionContext {
    /// Role text exactly as delivered by the session source
    #[serde(default)]
    pub role: Option<String>,

    /// Logged-in username, informational only
    #[serde(default)]
    pub username: Option<String>,
}

impl SessionContext {
    /// Create a session for a known role
    pub fn new(role: Role) -> Self {
        Self {
            role: Some(role.as_str().to_string()),
            username: None,
        }
    }

    /// Create a session from raw role text, which may be unrecognized
    pub fn from_raw(role: impl Into<String>) -> Self {
        Self {
            role: Some(role.into()),
            username: None,
        }
    }

    /// Builder: set username
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Resolved role, `None` when missing or unrecognized
    pub fn role(&self) -> Option<Role> {
        self.role.as_deref().and_then(|r| r.parse().ok())
    }

    /// Load a session from a JSON or YAML file
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        load_file(path)
    }
}

/// A rendered ticket list file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketListFile {
    #[serde(default)]
    pub tickets: Vec<RenderedTicket>,
}

impl TicketListFile {
    /// Load a rendered ticket list from a JSON or YAML file
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        load_file(path)
    }
}

/// Deserialize a file, choosing the format by extension
pub fn load_file<T: DeserializeOwned>(path: &Path) -> crate::Result<T> {
    let content = std::fs::read_to_string(path)?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Ok(serde_json::from_str(&content)?),
        Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&content)?),
        other => Err(TicketViewError::Config(format!(
            "Unsupported file extension {:?} for {}",
            other.unwrap_or(""),
            path.display()
        ))),
    }
}
