//! Shared test doubles and utilities for the Andara engine.

mod clock;
mod id;

pub use clock::{FixedClock, SteppingClock};
pub use id::SequenceIdGenerator;

/// Instant used by tests that need a fixed, readable timestamp.
///
/// # Panics
///
/// Never in practice; the literal date is valid.
#[must_use]
pub fn fixed_now() -> chrono::DateTime<chrono::Utc> {
    chrono::TimeZone::with_ymd_and_hms(&chrono::Utc, 2026, 1, 15, 10, 0, 0).unwrap()
}
