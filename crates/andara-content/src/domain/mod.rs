//! Domain layer for the Content context.

pub mod commands;
pub mod events;
