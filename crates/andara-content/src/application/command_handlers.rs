//! Command handlers for the Content context.
//!
//! Handlers validate the incoming command, build the resulting event with
//! the injected clock and id generator, and hand it back to the caller for
//! publishing.

use andara_core::clock::Clock;
use andara_core::command::Command;
use andara_core::error::DomainError;
use andara_core::event::{DomainEvent, EventContext};
use andara_core::id::IdGenerator;
use tracing::{debug, info};

use crate::domain::commands::ReloadContent;
use crate::domain::events::{ContentReloaded, ContentReloadedPayload};

fn require_non_blank(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::invalid_argument(field, "must not be blank"));
    }
    Ok(())
}

/// Handles the `ReloadContent` command: validates it and produces a
/// `ContentReloaded` event.
///
/// An empty `reloaded_ids` list is accepted and yields a count of zero.
///
/// # Errors
///
/// Returns `DomainError::InvalidArgument` if `content_type` or `source` is
/// blank, or if any entry of `reloaded_ids` is blank.
pub fn handle_reload_content(
    command: &ReloadContent,
    clock: &dyn Clock,
    ids: &dyn IdGenerator,
) -> Result<ContentReloaded, DomainError> {
    debug!(
        command_type = command.command_type(),
        correlation_id = %command.correlation_id(),
        "validating command"
    );

    require_non_blank("content_type", &command.content_type)?;
    require_non_blank("source", &command.source)?;
    if let Some(position) = command
        .reloaded_ids
        .iter()
        .position(|id| id.trim().is_empty())
    {
        return Err(DomainError::invalid_argument(
            format!("reloaded_ids[{position}]"),
            "must not be blank",
        ));
    }

    let event = ContentReloaded::create_with(
        clock,
        ids,
        ContentReloadedPayload::new(
            command.content_type.clone(),
            command.reloaded_ids.clone(),
            command.source.clone(),
        ),
        EventContext::new(command.instance_id, command.agent_id),
    );

    info!(
        event_id = %event.event_id(),
        correlation_id = %command.correlation_id(),
        content_type = event.content_type(),
        source = event.source(),
        count = event.count(),
        "content reloaded"
    );

    Ok(event)
}
