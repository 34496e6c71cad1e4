//! In-memory rendered ticket list handles

use crate::visibility_filter::{ActionControl, RenderedItem};
use serde::{Deserialize, Serialize};
use shared::{RenderedTicket, Ticket, Visibility};

/// Edit control attached to a rendered ticket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditControl {
    pub visibility: Visibility,
}

impl EditControl {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ActionControl for EditControl {
    fn visibility(&self) -> Visibility {
        self.visibility
    }

    fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }
}

/// A ticket as it appears in the rendered list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketItem {
    pub ticket: Ticket,

    /// The edit control, if the rendering layer attached one
    pub edit_control: Option<EditControl>,
}

impl TicketItem {
    /// Create an item without an edit control
    pub fn new(ticket: Ticket) -> Self {
        Self {
            ticket,
            edit_control: None,
        }
    }

    /// Builder: attach an edit control in its default state
    pub fn with_edit_control(mut self) -> Self {
        self.edit_control = Some(EditControl::new());
        self
    }

    /// Visibility of the edit control, `None` when absent
    pub fn edit_visibility(&self) -> Option<Visibility> {
        self.edit_control.map(|c| c.visibility)
    }
}

impl From<RenderedTicket> for TicketItem {
    fn from(entry: RenderedTicket) -> Self {
        let item = TicketItem::new(entry.ticket);
        if entry.editable {
            item.with_edit_control()
        } else {
            item
        }
    }
}

impl RenderedItem for TicketItem {
    type Control = EditControl;

    fn action_control_mut(&mut self) -> Option<&mut EditControl> {
        self.edit_control.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VisibilityFilter;
    use shared::Role;

    #[test]
    fn test_edit_control_starts_visible() {
        let item = TicketItem::new(Ticket::new(1, "Printer jam")).with_edit_control();
        assert_eq!(item.edit_visibility(), Some(Visibility::Visible));
    }

    #[test]
    fn test_from_rendered_ticket() {
        let editable: TicketItem = RenderedTicket {
            ticket: Ticket::new(1, "A"),
            editable: true,
        }
        .into();
        let readonly: TicketItem = RenderedTicket {
            ticket: Ticket::new(2, "B"),
            editable: false,
        }
        .into();

        assert!(editable.edit_control.is_some());
        assert!(readonly.edit_control.is_none());
    }

    #[test]
    fn test_filter_leaves_ticket_fields_untouched() {
        let ticket = Ticket::new(4, "Screen flicker")
            .with_description("Monitor on desk 12")
            .with_category("hardware")
            .with_priority("medium");
        let mut items = vec![TicketItem::new(ticket.clone()).with_edit_control()];

        VisibilityFilter::new().apply(Role::User, &mut items);

        assert_eq!(items[0].ticket, ticket);
        assert_eq!(items[0].edit_visibility(), Some(Visibility::Hidden));
    }

    #[test]
    fn test_serialized_visibility() {
        let mut item = TicketItem::new(Ticket::new(1, "A")).with_edit_control();
        VisibilityFilter::new().apply(Role::User, std::iter::once(&mut item));

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["editControl"]["visibility"], "hidden");
    }
}
