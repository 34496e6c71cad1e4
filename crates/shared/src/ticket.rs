//! Ticket records as delivered by the rendering layer

use serde::{Deserialize, Serialize};

fn default_status() -> String {
    "open".to_string()
}

/// A displayable ticket record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Ticket identifier
    pub id: u64,

    /// Short title shown in the list
    pub title: String,

    /// Longer description
    #[serde(default)]
    pub description: Option<String>,

    /// Category (e.g. 'hardware', 'network')
    #[serde(default)]
    pub category: Option<String>,

    /// Priority label
    #[serde(default)]
    pub priority: Option<String>,

    /// Status label, informational only
    #[serde(default = "default_status")]
    pub status: String,

    /// User id of the creator
    #[serde(default)]
    pub created_by: Option<u64>,

    /// User id of the assignee
    #[serde(default)]
    pub assigned_to: Option<u64>,
}

impl Ticket {
    /// Create a ticket with minimal fields
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            category: None,
            priority: None,
            status: default_status(),
            created_by: None,
            assigned_to: None,
        }
    }

    /// Builder: set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder: set category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Builder: set priority
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Builder: set status
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }
}

/// One entry of a rendered ticket list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedTicket {
    pub ticket: Ticket,

    /// Whether the rendering layer attached an edit control
    #[serde(default)]
    pub editable: bool,
}
