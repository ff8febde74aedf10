//! Query handlers for the Content context.
//!
//! This module decodes serialized content events and returns read-only
//! view DTOs.

use andara_core::error::DomainError;
use andara_core::event::{DomainEvent, EventRecord};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::events::ContentEvent;

/// Read-only view of a decoded `ContentReloaded` event.
#[derive(Debug, Serialize)]
pub struct ContentReloadedView {
    /// The event identifier.
    pub event_id: Uuid,
    /// When the reload happened.
    pub timestamp: DateTime<Utc>,
    /// Kind of content that was reloaded.
    pub content_type: String,
    /// Identifiers of the reloaded items.
    pub reloaded_ids: Vec<String>,
    /// What triggered the reload.
    pub source: String,
    /// Number of reloaded items.
    pub count: usize,
    /// The runtime instance, if one was recorded.
    pub instance_id: Option<Uuid>,
    /// The acting agent, if one was recorded.
    pub agent_id: Option<Uuid>,
}

/// Decodes a serialized content event into its view.
///
/// # Errors
///
/// Returns `DomainError::UnknownEventType` if the record is not a content
/// event, `DomainError::UnsupportedPayloadType` if its payload is corrupted,
/// and `DomainError::InvalidArgument` if its envelope or metadata are.
pub fn view_content_event(record: &EventRecord) -> Result<ContentReloadedView, DomainError> {
    match ContentEvent::decode(record)? {
        ContentEvent::Reloaded(event) => Ok(ContentReloadedView {
            event_id: event.event_id(),
            timestamp: event.timestamp(),
            content_type: event.content_type().to_owned(),
            reloaded_ids: event.reloaded_ids().to_vec(),
            source: event.source().to_owned(),
            count: event.count(),
            instance_id: event.instance_id(),
            agent_id: event.agent_id(),
        }),
    }
}
