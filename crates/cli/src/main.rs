//! Ticket View CLI - Render ticket lists for a session role
//!
//! Usage:
//!   ticket-view render --tickets <file> --role <role>   - Print the list for a role
//!   ticket-view render --tickets <file> --session <file> - Role from a session file
//!   ticket-view roles                                   - List known roles
//!   ticket-view interactive --tickets <file>            - Switch roles interactively

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cli::commands::{render, RenderCommand, RolesCommand};
use cli::interactive::InteractiveCli;

#[derive(Parser)]
#[command(name = "ticket-view")]
#[command(about = "Ticket list view with role-based edit controls")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a ticket list for a session role
    Render(RenderCommand),
    /// List known roles
    Roles(RolesCommand),
    /// Switch roles interactively over a ticket list
    Interactive {
        /// Rendered ticket list (JSON or YAML)
        #[arg(short, long)]
        tickets: PathBuf,

        /// Starting role
        #[arg(short, long)]
        role: Option<String>,

        /// Session file (JSON or YAML) supplying the starting role
        #[arg(short, long)]
        session: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render(cmd) => cmd.run(),
        Commands::Roles(cmd) => cmd.run(),
        Commands::Interactive {
            tickets,
            role,
            session,
        } => {
            let session = render::resolve_session(role.as_deref(), session.as_deref())?;
            let items = render::load_items(&tickets)?;
            let mut interactive = InteractiveCli::new(items, session);
            interactive.run()
        }
    }
}
