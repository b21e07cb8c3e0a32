//! Custom error types for the application.
//!
//! - [`FetchError`] - Network/fetch-related errors for listing requests
//! - [`ExplorerError`] - Errors surfaced by navigation transitions

use thiserror::Error;

use crate::models::PositionKey;

/// Broad classification of a [`FetchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// The request could not be sent or completed
    Transport,
    /// A response arrived but indicates failure
    Server,
}

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, offline, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
    /// HTTP error response (non-2xx status)
    #[error("Server error: HTTP {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            Self::NoWindow
            | Self::RequestCreationFailed
            | Self::NetworkError(_)
            | Self::Timeout => FetchErrorKind::Transport,
            Self::HttpError(_)
            | Self::ResponseReadFailed
            | Self::InvalidContent
            | Self::JsonParseError(_) => FetchErrorKind::Server,
        }
    }
}

/// Errors returned by navigation transitions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExplorerError {
    /// A listing fetch failed; wraps either transport or server cause.
    #[error("Failed to load '{key}': {source}")]
    OperationFailed {
        key: PositionKey,
        #[source]
        source: FetchError,
    },
    /// A position that must already be cached is missing from the cache.
    #[error("No cached listing for '{0}'")]
    MissingListing(PositionKey),
}

impl ExplorerError {
    pub fn operation_failed(key: PositionKey, source: FetchError) -> Self {
        Self::OperationFailed { key, source }
    }
}
