//! Interactive REPL mode

use crate::output;
use rbac::{TicketItem, TicketListView};
use shared::{Role, SessionContext};
use std::io::{self, Write};

/// Interactive CLI for switching roles over a rendered ticket list
pub struct InteractiveCli {
    view: TicketListView,
}

impl InteractiveCli {
    pub fn new(items: Vec<TicketItem>, session: SessionContext) -> Self {
        let mut view = TicketListView::new();
        view.set_session(session);
        view.render(items);
        Self { view }
    }

    pub fn view(&self) -> &TicketListView {
        &self.view
    }

    /// Run the interactive REPL
    pub fn run(&mut self) -> anyhow::Result<()> {
        println!("Ticket View Interactive Mode");
        println!("Type /help for commands, /quit to exit");
        println!();
        output::print_view(&self.view);

        loop {
            let role = self.view.session().role.as_deref().unwrap_or("no role");
            print!("[{}] > ", role);
            io::stdout().flush()?;

            let mut input = String::new();
            if io::stdin().read_line(&mut input)? == 0 {
                break;
            }
            let input = input.trim();

            if input.is_empty() {
                continue;
            }

            match self.handle_command(input) {
                Ok(true) => break,
                Ok(false) => continue,
                Err(e) => println!("Error: {}", e),
            }
        }

        Ok(())
    }

    fn handle_command(&mut self, input: &str) -> anyhow::Result<bool> {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let cmd = parts.first().copied().unwrap_or("");

        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Goodbye!");
                return Ok(true);
            }
            "/help" | "/h" => {
                println!("Commands:");
                println!("  /role <r>  - Switch role (user, support, admin)");
                println!("  /clear     - Clear the current role");
                println!("  /list      - Show the ticket list");
                println!("  /quit      - Exit");
            }
            "/role" => match parts.get(1) {
                Some(raw) => {
                    match raw.parse::<Role>() {
                        Ok(role) => self.view.set_role(role),
                        Err(e) => {
                            println!("{} - edit controls stay visible", e);
                            let mut session = self.view.session().clone();
                            session.role = Some(raw.to_string());
                            self.view.set_session(session);
                        }
                    }
                    output::print_view(&self.view);
                }
                None => {
                    let role = self
                        .view
                        .current_role()
                        .map(|r| r.to_string())
                        .unwrap_or_else(|| "no role".to_string());
                    println!("Current role: {}", role);
                }
            },
            "/clear" => {
                self.view.clear_role();
                output::print_view(&self.view);
            }
            "/list" => output::print_view(&self.view),
            _ => {
                println!("Unknown command: {}", input);
            }
        }

        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Ticket;

    fn cli() -> InteractiveCli {
        let items = vec![
            TicketItem::new(Ticket::new(1, "Printer jam")).with_edit_control(),
            TicketItem::new(Ticket::new(2, "VPN down")),
        ];
        InteractiveCli::new(items, SessionContext::new(Role::Support))
    }

    #[test]
    fn test_quit_commands() {
        for input in ["/quit", "/exit", "/q"] {
            let mut cli = cli();
            assert!(cli.handle_command(input).unwrap());
        }
    }

    #[test]
    fn test_help_does_not_exit() {
        let mut cli = cli();
        assert!(!cli.handle_command("/help").unwrap());
    }

    #[test]
    fn test_switch_to_user_hides_edit() {
        let mut cli = cli();
        assert_eq!(cli.view().editable_ids(), vec![1]);

        cli.handle_command("/role user").unwrap();
        assert_eq!(cli.view().current_role(), Some(Role::User));
        assert_eq!(cli.view().hidden_ids(), vec![1]);
    }

    #[test]
    fn test_switch_back_reshows_edit() {
        let mut cli = cli();
        cli.handle_command("/role user").unwrap();
        cli.handle_command("/role admin").unwrap();
        assert_eq!(cli.view().editable_ids(), vec![1]);
    }

    #[test]
    fn test_unknown_role_fails_open() {
        let mut cli = cli();
        cli.handle_command("/role user").unwrap();
        cli.handle_command("/role guest").unwrap();

        assert_eq!(cli.view().current_role(), None);
        assert_eq!(cli.view().session().role.as_deref(), Some("guest"));
        assert_eq!(cli.view().editable_ids(), vec![1]);
    }

    #[test]
    fn test_clear_role() {
        let mut cli = cli();
        cli.handle_command("/role user").unwrap();
        cli.handle_command("/clear").unwrap();

        assert_eq!(cli.view().current_role(), None);
        assert_eq!(cli.view().editable_ids(), vec![1]);
    }

    #[test]
    fn test_role_without_argument_keeps_state() {
        let mut cli = cli();
        assert!(!cli.handle_command("/role").unwrap());
        assert_eq!(cli.view().current_role(), Some(Role::Support));
    }

    #[test]
    fn test_unknown_command() {
        let mut cli = cli();
        assert!(!cli.handle_command("/tools").unwrap());
        assert!(!cli.handle_command("hello").unwrap());
    }
}
