//! Content Engine Errors

use thiserror::Error;

/// Common result type for content operations
pub type Result<T> = std::result::Result<T, ContentError>;

/// Errors raised while acquiring or paging content
#[derive(Debug, Clone, Error)]
pub enum ContentError {
    /// Network failure, timeout or non-2xx status from a source
    #[error("{source_name} unavailable: {reason}")]
    RemoteUnavailable { source_name: String, reason: String },

    /// Body was not JSON, or lacked `items`/`categories`/`settings`
    #[error("malformed payload from {source_name}: {reason}")]
    MalformedPayload { source_name: String, reason: String },

    /// Both the primary and the fallback source failed
    #[error("content data unavailable (primary: {primary}; fallback: {fallback})")]
    DataUnavailable {
        primary: Box<ContentError>,
        fallback: Box<ContentError>,
    },

    #[error("invalid page index {0}, pages start at 1")]
    InvalidPage(usize),

    #[error("invalid content config: {0}")]
    InvalidConfig(String),
}

impl ContentError {
    pub fn remote(source_name: &str, reason: impl Into<String>) -> Self {
        ContentError::RemoteUnavailable {
            source_name: source_name.to_string(),
            reason: reason.into(),
        }
    }

    pub fn malformed(source_name: &str, reason: impl Into<String>) -> Self {
        ContentError::MalformedPayload {
            source_name: source_name.to_string(),
            reason: reason.into(),
        }
    }

    /// True for failures a user should see as "could not load content"
    pub fn is_user_visible(&self) -> bool {
        matches!(self, ContentError::DataUnavailable { .. })
    }
}
