//! Standardized API error body.

use serde::{Deserialize, Serialize};

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// A human-readable explanation of the failure.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    // Common error constructors
    pub fn not_found() -> Self {
        Self::new("Not Found")
    }

    /// Generic body for storage and other internal failures. Details stay in
    /// the server log.
    pub fn internal_error() -> Self {
        Self::new("Internal server error")
    }
}
