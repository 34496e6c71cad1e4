//! # Ticket View Shared
//!
//! Common types used by the visibility filter and the CLI.

pub mod error;
pub mod role;
pub mod ticket;
pub mod visibility;
pub mod config;

// Re-exports
pub use error::*;
pub use role::*;
pub use ticket::*;
pub use visibility::*;
pub use config::*;
