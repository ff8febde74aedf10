//! Shared application state.

use std::sync::Arc;

use andara_core::clock::{Clock, SystemClock};
use andara_core::id::{IdGenerator, RandomIdGenerator, SeededIdGenerator};

use crate::config::Config;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Time source for event timestamps.
    pub clock: Arc<dyn Clock>,
    /// Source of event identifiers.
    pub id_generator: Arc<dyn IdGenerator>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self {
            clock,
            id_generator,
        }
    }

    /// Production state: system clock, and seeded ids if the configuration
    /// asks for them.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let id_generator: Arc<dyn IdGenerator> = match config.id_seed {
            Some(seed) => {
                tracing::info!(seed, "using seeded event id generator");
                Arc::new(SeededIdGenerator::new(seed))
            }
            None => Arc::new(RandomIdGenerator),
        };
        Self::new(Arc::new(SystemClock), id_generator)
    }
}
