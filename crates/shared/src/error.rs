//! Error types for the ticket view

use thiserror::Error;

/// Error returned when a role value is not one of the known roles
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Role '{value}' is not recognized. Known roles: user, support, admin")]
pub struct UnknownRoleError {
    pub value: String,
}

/// General ticket view error type
#[derive(Debug, Error)]
pub enum TicketViewError {
    #[error(transparent)]
    UnknownRole(#[from] UnknownRoleError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, TicketViewError>;
