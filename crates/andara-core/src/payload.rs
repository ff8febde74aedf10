//! Typed projections out of a dynamically typed event payload.
//!
//! Payloads travel as JSON objects. Events decoded from the wire use these
//! helpers to read their fields back, turning a value of the wrong shape
//! into `DomainError::UnsupportedPayloadType` instead of a panic.

use serde_json::{Map, Value};

use crate::error::DomainError;

/// Reads a string entry.
///
/// # Errors
///
/// Returns `DomainError::UnsupportedPayloadType` if `key` is missing or not
/// a JSON string.
pub fn require_str<'a>(payload: &'a Map<String, Value>, key: &str) -> Result<&'a str, DomainError> {
    payload
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| DomainError::unsupported_payload_type(key, "a string"))
}

/// Reads an array-of-strings entry.
///
/// # Errors
///
/// Returns `DomainError::UnsupportedPayloadType` if `key` is missing, not an
/// array, or holds a non-string element.
pub fn require_string_list(
    payload: &Map<String, Value>,
    key: &str,
) -> Result<Vec<String>, DomainError> {
    let unsupported = || DomainError::unsupported_payload_type(key, "an array of strings");
    payload
        .get(key)
        .and_then(Value::as_array)
        .ok_or_else(unsupported)?
        .iter()
        .map(|item| item.as_str().map(str::to_owned).ok_or_else(unsupported))
        .collect()
}

/// Reads a non-negative integer entry.
///
/// # Errors
///
/// Returns `DomainError::UnsupportedPayloadType` if `key` is missing or not
/// an unsigned integer.
pub fn require_u64(payload: &Map<String, Value>, key: &str) -> Result<u64, DomainError> {
    payload
        .get(key)
        .and_then(Value::as_u64)
        .ok_or_else(|| DomainError::unsupported_payload_type(key, "an unsigned integer"))
}
