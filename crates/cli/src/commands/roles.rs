//! ticket-view roles command

use clap::Args;
use rbac::VisibilityFilter;
use shared::Role;

#[derive(Debug, Args)]
pub struct RolesCommand {}

impl RolesCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        println!("Available roles:");
        for role in Role::ALL {
            println!("  {:<8} {}", role, describe(role));
        }
        Ok(())
    }
}

fn describe(role: Role) -> &'static str {
    if VisibilityFilter::visibility_for(role).is_visible() {
        "can edit tickets"
    } else {
        "edit controls hidden"
    }
}
