//! Route modules organized by bounded context.

pub mod content;
pub mod health;
