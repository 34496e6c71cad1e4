//! # Ticket View RBAC
//!
//! Role-based visibility of edit controls on rendered ticket lists.
//!
//! ## Components
//!
//! - `VisibilityFilter` - One-shot projection from role to control visibility
//! - `TicketItem` / `EditControl` - In-memory rendered list handles
//! - `TicketListView` - Re-applies the filter on role or list changes

pub mod visibility_filter;
pub mod rendered;
pub mod ticket_view;

pub use visibility_filter::{ActionControl, RenderedItem, VisibilityFilter};
pub use rendered::{EditControl, TicketItem};
pub use ticket_view::TicketListView;
