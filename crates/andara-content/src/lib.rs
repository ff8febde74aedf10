//! Andara — Content bounded context.
//!
//! Responsible for announcing content hot-reloads as domain events and for
//! reading those events back from their wire records.

pub mod application;
pub mod domain;
