//! Commands for the Content context.

use andara_core::command::Command;
use uuid::Uuid;

/// Command to announce that content has been hot-reloaded.
#[derive(Debug, Clone)]
pub struct ReloadContent {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Kind of content that was reloaded.
    pub content_type: String,
    /// Identifiers of the reloaded items. May be empty.
    pub reloaded_ids: Vec<String>,
    /// What triggered the reload, e.g. a file watcher name.
    pub source: String,
    /// The runtime instance that observed the reload.
    pub instance_id: Option<Uuid>,
    /// The agent that triggered the reload.
    pub agent_id: Option<Uuid>,
}

impl Command for ReloadContent {
    fn command_type(&self) -> &'static str {
        "content.reload"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
