//! CLI Commands

pub mod render;
pub mod roles;

pub use render::RenderCommand;
pub use roles::RolesCommand;
