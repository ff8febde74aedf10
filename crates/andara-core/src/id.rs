//! Identifier generation for determinism.
//!
//! In production, event identifiers are random v4 UUIDs. In tests and
//! reproducible dev sessions, a seeded or scripted generator is injected
//! instead so that every identifier an event carries can be predicted.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use uuid::{Builder, Uuid};

/// Source of unique identifiers for new events.
pub trait IdGenerator: Send + Sync {
    /// Returns an identifier that has not been handed out before.
    fn next_id(&self) -> Uuid;
}

/// Production generator backed by the operating system's randomness.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Generator that derives v4 UUIDs from a seeded RNG.
///
/// Two generators built from the same seed yield the same sequence, which
/// makes a replayed session produce identical event ids.
#[derive(Debug)]
pub struct SeededIdGenerator {
    rng: Mutex<StdRng>,
}

impl SeededIdGenerator {
    /// Creates a generator whose sequence is fully determined by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl IdGenerator for SeededIdGenerator {
    fn next_id(&self) -> Uuid {
        let mut bytes = [0_u8; 16];
        // The RNG state stays valid even if another holder panicked.
        self.rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .fill_bytes(&mut bytes);
        Builder::from_random_bytes(bytes).into_uuid()
    }
}
