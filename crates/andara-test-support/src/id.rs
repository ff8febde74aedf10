//! Test id generators — scripted `IdGenerator` implementations for tests.

use std::sync::Mutex;

use andara_core::id::IdGenerator;
use uuid::Uuid;

/// An id generator that hands out values from a predetermined sequence.
/// Panics if the sequence is exhausted.
#[derive(Debug)]
pub struct SequenceIdGenerator {
    remaining: Mutex<std::vec::IntoIter<Uuid>>,
}

impl SequenceIdGenerator {
    /// Create a new `SequenceIdGenerator` with the given ids.
    #[must_use]
    pub fn new(ids: Vec<Uuid>) -> Self {
        Self {
            remaining: Mutex::new(ids.into_iter()),
        }
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn next_id(&self) -> Uuid {
        self.remaining
            .lock()
            .unwrap()
            .next()
            .expect("SequenceIdGenerator exhausted")
    }
}
