//! Application layer for the Content context.

pub mod command_handlers;
pub mod query_handlers;
