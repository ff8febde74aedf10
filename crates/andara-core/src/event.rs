//! Domain event abstractions.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::DomainError;

/// Metadata value recorded when no instance or agent is known.
pub const SYSTEM_ACTOR: &str = "system";

/// Metadata key naming the runtime instance that produced the event.
pub const INSTANCE_ID_KEY: &str = "instanceId";

/// Metadata key naming the agent that triggered the event.
pub const AGENT_ID_KEY: &str = "agentId";

/// Identity fields attached to every domain event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventEnvelope {
    /// Unique event identifier.
    pub event_id: Uuid,
    /// Type name for deserialization routing.
    pub event_type: String,
    /// Timestamp of event creation.
    pub timestamp: DateTime<Utc>,
    /// Aggregate this event is attributed to.
    pub aggregate_id: String,
    /// Kind of aggregate named by `aggregate_id`.
    pub aggregate_type: String,
    /// Version of the aggregate after this event.
    pub version: i64,
}

/// Operational context of an event: which instance and agent produced it.
///
/// Either side may be unknown. On the wire an unknown side is written as
/// [`SYSTEM_ACTOR`], and reading that literal back yields `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EventContext {
    instance_id: Option<Uuid>,
    agent_id: Option<Uuid>,
}

impl EventContext {
    /// Creates a context from optional instance and agent identifiers.
    #[must_use]
    pub const fn new(instance_id: Option<Uuid>, agent_id: Option<Uuid>) -> Self {
        Self {
            instance_id,
            agent_id,
        }
    }

    /// A context with neither instance nor agent, attributed to the system.
    #[must_use]
    pub const fn system() -> Self {
        Self::new(None, None)
    }

    /// The producing runtime instance, if known.
    #[must_use]
    pub const fn instance_id(&self) -> Option<Uuid> {
        self.instance_id
    }

    /// The acting agent, if known.
    #[must_use]
    pub const fn agent_id(&self) -> Option<Uuid> {
        self.agent_id
    }

    /// Renders the context as its wire mapping. The result always holds
    /// exactly `instanceId` and `agentId`.
    #[must_use]
    pub fn to_metadata(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            (INSTANCE_ID_KEY.to_owned(), actor_label(self.instance_id)),
            (AGENT_ID_KEY.to_owned(), actor_label(self.agent_id)),
        ])
    }

    /// Parses a wire mapping produced by [`EventContext::to_metadata`].
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if a key is missing, an extra
    /// key is present, or a value is neither `"system"` nor a UUID.
    pub fn from_metadata(metadata: &BTreeMap<String, String>) -> Result<Self, DomainError> {
        if let Some(extra) = metadata
            .keys()
            .find(|key| key.as_str() != INSTANCE_ID_KEY && key.as_str() != AGENT_ID_KEY)
        {
            return Err(DomainError::invalid_argument(
                extra.as_str(),
                "unexpected metadata key",
            ));
        }
        Ok(Self {
            instance_id: parse_actor(metadata, INSTANCE_ID_KEY)?,
            agent_id: parse_actor(metadata, AGENT_ID_KEY)?,
        })
    }
}

fn actor_label(id: Option<Uuid>) -> String {
    id.map_or_else(|| SYSTEM_ACTOR.to_owned(), |id| id.to_string())
}

fn parse_actor(
    metadata: &BTreeMap<String, String>,
    key: &str,
) -> Result<Option<Uuid>, DomainError> {
    match metadata.get(key).map(String::as_str) {
        None => Err(DomainError::invalid_argument(key, "missing metadata entry")),
        Some(SYSTEM_ACTOR) => Ok(None),
        Some(raw) => Uuid::parse_str(raw).map(Some).map_err(|e| {
            DomainError::invalid_argument(
                key,
                format!("expected \"{SYSTEM_ACTOR}\" or a UUID: {e}"),
            )
        }),
    }
}

impl Serialize for EventContext {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_metadata().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EventContext {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let metadata = BTreeMap::<String, String>::deserialize(deserializer)?;
        Self::from_metadata(&metadata).map_err(D::Error::custom)
    }
}

/// Wire-facing shape of any domain event: envelope, payload, and metadata
/// as plain mappings, ready for an event log or message bus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Identity fields, flattened into the record.
    #[serde(flatten)]
    pub envelope: EventEnvelope,
    /// Event-specific data.
    pub payload: Map<String, Value>,
    /// Operational context.
    pub metadata: BTreeMap<String, String>,
}

/// Capability contract every domain event satisfies.
///
/// Implementors supply the envelope, payload projection, and context; the
/// individual readers are derived from those.
pub trait DomainEvent: Send + Sync + std::fmt::Debug {
    /// Returns the identity fields of this event.
    fn envelope(&self) -> &EventEnvelope;

    /// Projects the event-specific data into a key/value mapping.
    fn payload(&self) -> Map<String, Value>;

    /// Returns the operational context of this event.
    fn context(&self) -> &EventContext;

    /// Unique event identifier.
    fn event_id(&self) -> Uuid {
        self.envelope().event_id
    }

    /// Type name used for routing and deserialization.
    fn event_type(&self) -> &str {
        &self.envelope().event_type
    }

    /// Creation instant.
    fn timestamp(&self) -> DateTime<Utc> {
        self.envelope().timestamp
    }

    /// Aggregate this event is attributed to.
    fn aggregate_id(&self) -> &str {
        &self.envelope().aggregate_id
    }

    /// Kind of aggregate.
    fn aggregate_type(&self) -> &str {
        &self.envelope().aggregate_type
    }

    /// Aggregate version marker.
    fn version(&self) -> i64 {
        self.envelope().version
    }

    /// Operational context rendered as a string mapping.
    fn metadata(&self) -> BTreeMap<String, String> {
        self.context().to_metadata()
    }

    /// Converts the event into its wire-facing record.
    fn to_record(&self) -> EventRecord {
        EventRecord {
            envelope: self.envelope().clone(),
            payload: self.payload(),
            metadata: self.metadata(),
        }
    }
}
