//! Error type for persistence and configuration access.
//!
//! Every failure raised while reading configuration, loading event products or
//! resolving input collections is reported as a [`PersistencyError`]. The
//! isolation engine itself never fails and has no error type.

use thiserror::Error;

/// Failure while accessing persisted data or configuration.
///
/// Carries a human-readable message and, optionally, the name of the method
/// that raised it. Callers are expected to propagate it to a top-level handler.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", render(.message, .method))]
pub struct PersistencyError {
    message: String,
    method: Option<String>,
}

fn render(message: &str, method: &Option<String>) -> String {
    match method {
        Some(method) => format!("{method}: {message}"),
        None => message.to_string(),
    }
}

impl PersistencyError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            method: None,
        }
    }

    /// Error tagged with the method that raised it.
    pub fn with_method(message: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            method: Some(method.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }
}

impl From<serde_json::Error> for PersistencyError {
    fn from(err: serde_json::Error) -> Self {
        PersistencyError::new(format!("JSON decoding failed: {err}"))
    }
}

pub type Result<T> = std::result::Result<T, PersistencyError>;
