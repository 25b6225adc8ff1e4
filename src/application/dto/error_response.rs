//! # Error Response
//!
//! Serializable failure payload for whatever boundary presents errors.

use crate::application::error::ApplicationError;
use crate::application::reporting::error_chain;
use serde::{Deserialize, Serialize};

/// Failure payload: a stable code, the top-level message, and the messages
/// of the underlying causes (outermost first).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Cause messages below `message`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub causes: Vec<String>,
}

impl ErrorResponse {
    /// Creates a new error response without causes.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            causes: Vec::new(),
        }
    }

    /// Builds the response for an application failure.
    #[must_use]
    pub fn from_error(err: &ApplicationError) -> Self {
        let mut chain = error_chain(err).into_iter();
        let message = chain.next().unwrap_or_default();
        Self {
            code: err.error_code().to_string(),
            message,
            causes: chain.collect(),
        }
    }
}

impl From<&ApplicationError> for ErrorResponse {
    fn from(err: &ApplicationError) -> Self {
        Self::from_error(err)
    }
}
