//! Command abstractions.

use uuid::Uuid;

/// A request to change the system, handled by an application-layer handler.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// Dotted name of the command, used as a logging field.
    fn command_type(&self) -> &'static str;

    /// Correlation ID carried into every log line the command produces.
    fn correlation_id(&self) -> Uuid;
}
