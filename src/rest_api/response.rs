//! # Response Formatting
//!
//! Standard response types for the REST API.

use serde::Serialize;

/// Success acknowledgement for a mutating request
#[derive(Debug, Clone, Serialize)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
}

impl ActionResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn registered() -> Self {
        Self::new("Student registered successfully!")
    }

    pub fn updated() -> Self {
        Self::new("Student updated successfully!")
    }

    pub fn deleted() -> Self {
        Self::new("Student deleted")
    }
}

/// Root page body carrying the configured heading
#[derive(Debug, Clone, Serialize)]
pub struct IndexResponse {
    pub heading: String,
}
