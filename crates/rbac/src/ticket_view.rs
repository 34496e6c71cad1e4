//! TicketListView - Rendered ticket list kept in sync with the session role

use crate::{TicketItem, VisibilityFilter};
use shared::{Role, SessionContext};

/// Holds a rendered ticket list and re-applies the filter on every change
#[derive(Debug, Default)]
pub struct TicketListView {
    /// Rendered items in display order
    items: Vec<TicketItem>,
    /// Current session
    session: SessionContext,
    filter: VisibilityFilter,
}

impl TicketListView {
    /// Create an empty view with no session role
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the rendered list
    pub fn render(&mut self, items: impl IntoIterator<Item = TicketItem>) {
        self.items = items.into_iter().collect();
        self.update_visibility();
    }

    /// Append one rendered item
    pub fn push(&mut self, item: TicketItem) {
        self.items.push(item);
        self.update_visibility();
    }

    /// Set the current role
    pub fn set_role(&mut self, role: Role) {
        self.session.role = Some(role.as_str().to_string());
        self.update_visibility();
    }

    /// Replace the whole session
    pub fn set_session(&mut self, session: SessionContext) {
        self.session = session;
        self.update_visibility();
    }

    /// Clear the current role; controls become visible
    pub fn clear_role(&mut self) {
        self.session.role = None;
        self.update_visibility();
    }

    /// Get the current role, if recognized
    pub fn current_role(&self) -> Option<Role> {
        self.session.role()
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    fn update_visibility(&mut self) {
        self.filter.apply_for_session(&self.session, &mut self.items);
    }

    /// All rendered items
    pub fn items(&self) -> &[TicketItem] {
        &self.items
    }

    /// Ids of tickets whose edit control is visible
    pub fn editable_ids(&self) -> Vec<u64> {
        self.items
            .iter()
            .filter(|i| i.edit_visibility().is_some_and(|v| v.is_visible()))
            .map(|i| i.ticket.id)
            .collect()
    }

    /// Ids of tickets whose edit control is hidden
    pub fn hidden_ids(&self) -> Vec<u64> {
        self.items
            .iter()
            .filter(|i| i.edit_visibility().is_some_and(|v| v.is_hidden()))
            .map(|i| i.ticket.id)
            .collect()
    }
}
