//! Timetable error types.

use std::path::PathBuf;

use crate::domain::InvalidArgument;

/// Errors that can occur when reading or writing a timetable.
#[derive(Debug, thiserror::Error)]
pub enum TimetableError {
    /// Reading or writing the timetable file failed
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid timetable JSON
    #[error("JSON error: {message}")]
    Json { message: String },

    /// The document is well-formed but its contents are rejected
    #[error(transparent)]
    Invalid(#[from] InvalidArgument),
}

impl From<serde_json::Error> for TimetableError {
    fn from(e: serde_json::Error) -> Self {
        TimetableError::Json {
            message: e.to_string(),
        }
    }
}
