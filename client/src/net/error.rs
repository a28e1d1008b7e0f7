//! Error taxonomy for calls to the user API.
//!
//! Every failure stays local to the call site: views match on the variant to
//! pick an inline message or a notification, and nothing here is fatal.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorBody;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The credential endpoint rejected the username/password pair.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// A bearer call came back 401; the session has been cleared.
    #[error("session expired")]
    Unauthorized,

    /// The requested resource does not exist (404).
    #[error("not found")]
    NotFound,

    /// Any other non-success status.
    #[error("request failed with status {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Status { status: u16, message: Option<String> },

    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// A request body could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),

    /// A response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// A browser API (cookies, blobs, downloads) failed.
    #[error("browser error: {0}")]
    Browser(String),
}

impl ApiError {
    /// Map a non-success, non-401 status and its body to an error.
    pub fn from_status(status: u16, body: &[u8]) -> Self {
        if status == 404 {
            return Self::NotFound;
        }
        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());
        Self::Status { status, message }
    }

    /// HTTP status behind this error, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::InvalidCredentials | Self::Unauthorized => Some(401),
            Self::NotFound => Some(404),
            Self::Status { status, .. } => Some(*status),
            Self::Network(_) | Self::Encode(_) | Self::Decode(_) | Self::Browser(_) => None,
        }
    }
}
