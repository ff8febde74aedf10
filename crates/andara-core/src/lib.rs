//! Andara Core — shared domain abstractions.
//!
//! This crate defines the event contract, the time and identifier
//! capabilities, and the error type that every bounded context depends on.
//! It contains no infrastructure code.

pub mod clock;
pub mod command;
pub mod error;
pub mod event;
pub mod id;
pub mod payload;
