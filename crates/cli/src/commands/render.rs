//! ticket-view render command

use crate::output;
use anyhow::Context;
use clap::Args;
use rbac::{TicketItem, TicketListView};
use shared::{SessionContext, TicketListFile};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Args)]
pub struct RenderCommand {
    /// Rendered ticket list (JSON or YAML)
    #[arg(short, long)]
    pub tickets: PathBuf,

    /// Session role (user, support, admin); overrides --session
    #[arg(short, long)]
    pub role: Option<String>,

    /// Session file (JSON or YAML) supplying the role
    #[arg(short, long)]
    pub session: Option<PathBuf>,

    /// Output the view as JSON
    #[arg(long)]
    pub json: bool,
}

impl RenderCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        let session = resolve_session(self.role.as_deref(), self.session.as_deref())?;
        let view = build_view(&self.tickets, session)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(view.items())?);
        } else {
            output::print_view(&view);
        }
        Ok(())
    }
}

/// Load rendered items from a ticket list file
pub fn load_items(path: &Path) -> anyhow::Result<Vec<TicketItem>> {
    let list = TicketListFile::from_file(path)
        .with_context(|| format!("Failed to load tickets from {}", path.display()))?;
    info!(count = list.tickets.len(), path = %path.display(), "Loaded ticket list");
    Ok(list.tickets.into_iter().map(TicketItem::from).collect())
}

/// Resolve the session; a role flag wins over a session file
pub fn resolve_session(
    role: Option<&str>,
    session_path: Option<&Path>,
) -> anyhow::Result<SessionContext> {
    let mut session = match session_path {
        Some(path) => SessionContext::from_file(path)
            .with_context(|| format!("Failed to load session from {}", path.display()))?,
        None => SessionContext::default(),
    };

    if let Some(role) = role {
        session.role = Some(role.to_string());
    }

    if let (Some(raw), None) = (session.role.as_deref(), session.role()) {
        warn!(role = raw, "Unknown role, edit controls stay visible");
    }
    Ok(session)
}

/// Build a view from a ticket list file and a session
pub fn build_view(tickets: &Path, session: SessionContext) -> anyhow::Result<TicketListView> {
    let mut view = TicketListView::new();
    view.set_session(session);
    view.render(load_items(tickets)?);
    Ok(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Role;

    const TICKETS_YAML: &str = r#"
tickets:
  - ticket:
      id: 1
      title: Printer jam
    editable: true
  - ticket:
      id: 2
      title: VPN down
  - ticket:
      id: 3
      title: New laptop
      category: hardware
    editable: true
"#;

    fn write_tickets(dir: &Path) -> PathBuf {
        let path = dir.join("tickets.yaml");
        std::fs::write(&path, TICKETS_YAML).unwrap();
        path
    }

    #[test]
    fn test_build_view_for_user() {
        let dir = tempfile::tempdir().unwrap();
        let tickets = write_tickets(dir.path());

        let view = build_view(&tickets, SessionContext::new(Role::User)).unwrap();
        assert_eq!(view.items().len(), 3);
        assert_eq!(view.hidden_ids(), vec![1, 3]);
    }

    #[test]
    fn test_build_view_for_support() {
        let dir = tempfile::tempdir().unwrap();
        let tickets = write_tickets(dir.path());

        let view = build_view(&tickets, SessionContext::new(Role::Support)).unwrap();
        assert_eq!(view.editable_ids(), vec![1, 3]);
    }

    #[test]
    fn test_role_flag_overrides_session_file() {
        let dir = tempfile::tempdir().unwrap();
        let session_path = dir.path().join("session.json");
        std::fs::write(&session_path, r#"{"role": "user", "username": "alice"}"#).unwrap();

        let session = resolve_session(Some("admin"), Some(session_path.as_path())).unwrap();
        assert_eq!(session.role(), Some(Role::Admin));
        assert_eq!(session.username.as_deref(), Some("alice"));
    }

    #[test]
    fn test_unknown_role_flag_is_accepted() {
        let session = resolve_session(Some("guest"), None).unwrap();
        assert_eq!(session.role(), None);
        assert_eq!(session.role.as_deref(), Some("guest"));
    }

    #[test]
    fn test_missing_ticket_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_items(&dir.path().join("missing.json"));
        assert!(result.is_err());
    }
}
