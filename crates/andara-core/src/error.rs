//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A required argument was missing, blank, or malformed.
    #[error("invalid argument `{field}`: {reason}")]
    InvalidArgument {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A payload entry held a value of the wrong shape.
    #[error("unsupported payload type for `{key}`: expected {expected}")]
    UnsupportedPayloadType {
        /// The payload key that failed to project.
        key: String,
        /// Description of the shape that was expected.
        expected: &'static str,
    },

    /// An event record carried a type name no decoder recognizes.
    #[error("unknown event type: {0}")]
    UnknownEventType(String),
}

impl DomainError {
    /// Shorthand for an `InvalidArgument` error.
    #[must_use]
    pub fn invalid_argument(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for an `UnsupportedPayloadType` error.
    #[must_use]
    pub fn unsupported_payload_type(key: impl Into<String>, expected: &'static str) -> Self {
        Self::UnsupportedPayloadType {
            key: key.into(),
            expected,
        }
    }
}
