//! Ticket view CLI library

pub mod commands;
pub mod interactive;
pub mod output;
