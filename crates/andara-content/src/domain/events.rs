//! Domain events for the Content context.

use andara_core::clock::{Clock, SystemClock};
use andara_core::error::DomainError;
use andara_core::event::{DomainEvent, EventContext, EventEnvelope, EventRecord};
use andara_core::id::{IdGenerator, RandomIdGenerator};
use andara_core::payload;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Event type name of [`ContentReloaded`].
pub const CONTENT_RELOADED_EVENT_TYPE: &str = "ContentReloaded";

/// Aggregate type every content event is attributed to.
pub const CONTENT_AGGREGATE_TYPE: &str = "Content";

/// Version stamped on every freshly created [`ContentReloaded`].
pub const CONTENT_RELOADED_VERSION: i64 = 1;

/// Payload key for the reloaded content type.
pub const CONTENT_TYPE_KEY: &str = "contentType";
/// Payload key for the reloaded item ids.
pub const RELOADED_IDS_KEY: &str = "reloadedIds";
/// Payload key for the reload trigger.
pub const SOURCE_KEY: &str = "source";
/// Payload key for the number of reloaded items.
pub const COUNT_KEY: &str = "count";

/// Data carried by a [`ContentReloaded`] event.
///
/// The item count is not stored; it is always derived from `reloaded_ids`,
/// so the projected `count` can never disagree with the id list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentReloadedPayload {
    content_type: String,
    reloaded_ids: Vec<String>,
    source: String,
}

impl ContentReloadedPayload {
    /// Creates a payload.
    #[must_use]
    pub fn new(
        content_type: impl Into<String>,
        reloaded_ids: Vec<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            content_type: content_type.into(),
            reloaded_ids,
            source: source.into(),
        }
    }

    /// Kind of content that was reloaded.
    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Identifiers of the reloaded items, in the order reported.
    #[must_use]
    pub fn reloaded_ids(&self) -> &[String] {
        &self.reloaded_ids
    }

    /// What triggered the reload, e.g. a file watcher name.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of reloaded items.
    #[must_use]
    pub fn count(&self) -> usize {
        self.reloaded_ids.len()
    }

    /// Projects the payload into its four-key wire mapping.
    #[must_use]
    pub fn to_mapping(&self) -> Map<String, Value> {
        let mut map = Map::new();
        let content_type = Value::from(self.content_type.as_str());
        let reloaded_ids = Value::from(self.reloaded_ids.clone());
        map.insert(CONTENT_TYPE_KEY.to_owned(), content_type);
        map.insert(RELOADED_IDS_KEY.to_owned(), reloaded_ids);
        map.insert(SOURCE_KEY.to_owned(), Value::String(self.source.clone()));
        map.insert(COUNT_KEY.to_owned(), Value::from(self.count()));
        map
    }

    /// Reads a payload back from its wire mapping. Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnsupportedPayloadType` if a key is missing, has
    /// the wrong JSON type, or `count` disagrees with `reloadedIds`.
    pub fn from_mapping(map: &Map<String, Value>) -> Result<Self, DomainError> {
        let content_type = payload::require_str(map, CONTENT_TYPE_KEY)?.to_owned();
        let reloaded_ids = payload::require_string_list(map, RELOADED_IDS_KEY)?;
        let source = payload::require_str(map, SOURCE_KEY)?.to_owned();
        let count = payload::require_u64(map, COUNT_KEY)?;
        if usize::try_from(count).ok() != Some(reloaded_ids.len()) {
            return Err(DomainError::unsupported_payload_type(
                COUNT_KEY,
                "the length of reloadedIds",
            ));
        }
        Ok(Self {
            content_type,
            reloaded_ids,
            source,
        })
    }
}

impl Serialize for ContentReloadedPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_mapping().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ContentReloadedPayload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        Self::from_mapping(&map).map_err(D::Error::custom)
    }
}

/// Emitted when content is hot-reloaded during development.
///
/// Immutable once created: every field is private and only readable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentReloaded {
    envelope: EventEnvelope,
    payload: ContentReloadedPayload,
    context: EventContext,
}

impl ContentReloaded {
    /// Creates the event using the system clock and random identifiers.
    ///
    /// Absent `instance_id` or `agent_id` are recorded as `"system"` in the
    /// event metadata.
    #[must_use]
    pub fn create(
        content_type: impl Into<String>,
        reloaded_ids: Vec<String>,
        source: impl Into<String>,
        instance_id: Option<Uuid>,
        agent_id: Option<Uuid>,
    ) -> Self {
        Self::create_with(
            &SystemClock,
            &RandomIdGenerator,
            ContentReloadedPayload::new(content_type, reloaded_ids, source),
            EventContext::new(instance_id, agent_id),
        )
    }

    /// Creates the event with an injected clock and id generator.
    ///
    /// The aggregate id is the payload's content type; the version is
    /// always [`CONTENT_RELOADED_VERSION`].
    #[must_use]
    pub fn create_with(
        clock: &dyn Clock,
        ids: &dyn IdGenerator,
        payload: ContentReloadedPayload,
        context: EventContext,
    ) -> Self {
        let envelope = EventEnvelope {
            event_id: ids.next_id(),
            event_type: CONTENT_RELOADED_EVENT_TYPE.to_owned(),
            timestamp: clock.now(),
            aggregate_id: payload.content_type.clone(),
            aggregate_type: CONTENT_AGGREGATE_TYPE.to_owned(),
            version: CONTENT_RELOADED_VERSION,
        };
        Self {
            envelope,
            payload,
            context,
        }
    }

    /// Rebuilds the event from its wire record.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownEventType` if the record is another kind
    /// of event, `DomainError::UnsupportedPayloadType` if the payload is
    /// corrupted, and `DomainError::InvalidArgument` if the envelope or
    /// metadata disagree with what `create` would have produced.
    pub fn from_record(record: &EventRecord) -> Result<Self, DomainError> {
        let envelope = &record.envelope;
        if envelope.event_type != CONTENT_RELOADED_EVENT_TYPE {
            return Err(DomainError::UnknownEventType(envelope.event_type.clone()));
        }
        if envelope.aggregate_type != CONTENT_AGGREGATE_TYPE {
            return Err(DomainError::invalid_argument(
                "aggregateType",
                format!("expected \"{CONTENT_AGGREGATE_TYPE}\""),
            ));
        }
        let payload = ContentReloadedPayload::from_mapping(&record.payload)?;
        if envelope.aggregate_id != payload.content_type {
            return Err(DomainError::invalid_argument(
                "aggregateId",
                "must equal the payload contentType",
            ));
        }
        let context = EventContext::from_metadata(&record.metadata)?;
        Ok(Self {
            envelope: envelope.clone(),
            payload,
            context,
        })
    }

    /// The typed payload.
    #[must_use]
    pub fn details(&self) -> &ContentReloadedPayload {
        &self.payload
    }

    /// Kind of content that was reloaded.
    #[must_use]
    pub fn content_type(&self) -> &str {
        self.payload.content_type()
    }

    /// Identifiers of the reloaded items.
    #[must_use]
    pub fn reloaded_ids(&self) -> &[String] {
        self.payload.reloaded_ids()
    }

    /// What triggered the reload.
    #[must_use]
    pub fn source(&self) -> &str {
        self.payload.source()
    }

    /// Number of reloaded items.
    #[must_use]
    pub fn count(&self) -> usize {
        self.payload.count()
    }

    /// The runtime instance that observed the reload, if known.
    #[must_use]
    pub fn instance_id(&self) -> Option<Uuid> {
        self.context.instance_id()
    }

    /// The agent that triggered the reload, if known.
    #[must_use]
    pub fn agent_id(&self) -> Option<Uuid> {
        self.context.agent_id()
    }
}

impl DomainEvent for ContentReloaded {
    fn envelope(&self) -> &EventEnvelope {
        &self.envelope
    }

    fn payload(&self) -> Map<String, Value> {
        self.payload.to_mapping()
    }

    fn context(&self) -> &EventContext {
        &self.context
    }
}

impl Serialize for ContentReloaded {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_record().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ContentReloaded {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = EventRecord::deserialize(deserializer)?;
        Self::from_record(&record).map_err(D::Error::custom)
    }
}

/// Every event kind of the Content context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentEvent {
    /// Content has been hot-reloaded.
    Reloaded(ContentReloaded),
}

impl ContentEvent {
    /// Decodes a wire record, routing on its event type.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownEventType` for records that do not belong
    /// to the Content context, or whatever the matching decoder reports.
    pub fn decode(record: &EventRecord) -> Result<Self, DomainError> {
        match record.envelope.event_type.as_str() {
            CONTENT_RELOADED_EVENT_TYPE => ContentReloaded::from_record(record).map(Self::Reloaded),
            other => Err(DomainError::UnknownEventType(other.to_owned())),
        }
    }
}

impl From<ContentReloaded> for ContentEvent {
    fn from(event: ContentReloaded) -> Self {
        Self::Reloaded(event)
    }
}

impl DomainEvent for ContentEvent {
    fn envelope(&self) -> &EventEnvelope {
        match self {
            Self::Reloaded(event) => event.envelope(),
        }
    }

    fn payload(&self) -> Map<String, Value> {
        match self {
            Self::Reloaded(event) => DomainEvent::payload(event),
        }
    }

    fn context(&self) -> &EventContext {
        match self {
            Self::Reloaded(event) => event.context(),
        }
    }
}
