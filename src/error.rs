//! Typed errors of the engine.
//!
//! "Not found" is never represented here: matchers and readers return
//! `Option` or empty collections for that. These types cover malformed input,
//! invalid arguments and cancellation.

use thiserror::Error;

/// A serialized pattern could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("pattern string is empty")]
    Empty,
    #[error("token \"{token}\" has {found} fields, expected {expected}")]
    FieldCount {
        token: String,
        expected: usize,
        found: usize,
    },
    #[error("token \"{token}\": field \"{field}\" is not a number")]
    InvalidNumber { token: String, field: String },
    #[error("token \"{token}\": {field} value {value} is out of range")]
    OutOfRange {
        token: String,
        field: &'static str,
        value: i64,
    },
}

/// A random range was requested with `min > max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid range: min {min} is greater than max {max}")]
pub struct InvalidRange {
    pub min: i64,
    pub max: i64,
}

/// An operation was aborted through its cancel token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("operation cancelled")]
pub struct Cancelled;
