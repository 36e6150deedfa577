//! Domain error type.
//!
//! Every validation failure in the domain layer is reported as an
//! [`InvalidArgument`]. There is no transient failure category: the domain
//! does no I/O, so a rejected input stays rejected until the caller fixes it.

use std::fmt;

/// A rejected argument: out of range, malformed, or missing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid argument: {reason}")]
pub struct InvalidArgument {
    reason: String,
}

impl InvalidArgument {
    /// Create an error with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Create an error for a value outside its valid range.
    pub(crate) fn out_of_range(what: &str, value: impl fmt::Display, range: &str) -> Self {
        Self::new(format!("{what} must be in {range}, got {value}"))
    }

    /// Returns the human-readable reason.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}
