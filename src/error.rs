//! Error types for the element boundary

use thiserror::Error;

/// Failures reported by a [`Host`](crate::element::Host) capability
#[derive(Debug, Error)]
pub enum HostError {
    /// The host refused to replace the element content
    #[error("host rejected content: {reason}")]
    Content { reason: String },

    /// The host could not install a shared stylesheet
    #[error("failed to install style '{id}': {reason}")]
    Style { id: String, reason: String },
}

impl HostError {
    /// Create a content error
    pub fn content(reason: impl Into<String>) -> Self {
        Self::Content {
            reason: reason.into(),
        }
    }

    /// Create a style installation error
    pub fn style(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Style {
            id: id.into(),
            reason: reason.into(),
        }
    }
}

/// Errors that can occur while rendering an element
#[derive(Debug, Error)]
pub enum ElementError {
    /// Error from the host environment
    #[error("host error: {0}")]
    Host(#[from] HostError),

    /// Descriptor could not be serialized for the `data` attribute
    #[error("failed to serialize element data: {0}")]
    Serialize(#[from] serde_json::Error),
}
