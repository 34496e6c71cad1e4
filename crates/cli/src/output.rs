//! Text rendering of a ticket list view

use console::style;
use rbac::{TicketItem, TicketListView};
use shared::Visibility;

/// Label for an item's edit control state
pub fn control_label(item: &TicketItem) -> &'static str {
    match item.edit_visibility() {
        Some(Visibility::Visible) => "edit",
        Some(Visibility::Hidden) => "edit (hidden)",
        None => "-",
    }
}

/// Plain one-line description of an item
pub fn format_item(item: &TicketItem) -> String {
    let ticket = &item.ticket;
    let mut line = format!("#{:<4} {}", ticket.id, ticket.title);

    if let Some(category) = &ticket.category {
        line.push_str(&format!(" ({})", category));
    }
    if let Some(priority) = &ticket.priority {
        line.push_str(&format!(" !{}", priority));
    }
    line.push_str(&format!(" [{}]", ticket.status));
    line
}

/// Print the current view to stdout
pub fn print_view(view: &TicketListView) {
    let role = view
        .current_role()
        .map(|r| r.to_string())
        .unwrap_or_else(|| "no role".to_string());
    println!("{} {}", style("Role:").bold(), role);

    if view.items().is_empty() {
        println!("  (no tickets)");
        return;
    }

    for item in view.items() {
        let label = control_label(item);
        let label = match item.edit_visibility() {
            Some(Visibility::Visible) => style(label).green(),
            _ => style(label).dim(),
        };
        println!("  {}  {}", format_item(item), label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Ticket;

    #[test]
    fn test_control_labels() {
        let mut item = TicketItem::new(Ticket::new(1, "A")).with_edit_control();
        assert_eq!(control_label(&item), "edit");

        if let Some(control) = item.edit_control.as_mut() {
            control.visibility = Visibility::Hidden;
        }
        assert_eq!(control_label(&item), "edit (hidden)");

        let bare = TicketItem::new(Ticket::new(2, "B"));
        assert_eq!(control_label(&bare), "-");
    }

    #[test]
    fn test_format_item() {
        let item = TicketItem::new(
            Ticket::new(12, "VPN down")
                .with_category("network")
                .with_priority("high"),
        );
        assert_eq!(format_item(&item), "#12   VPN down (network) !high [open]");
    }
}
