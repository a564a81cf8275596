//! Error types for the recruitflow client library.
//!
//! The taxonomy separates transport-level failures from backend rejections
//! so callers can decide between retrying, re-authenticating, or surfacing
//! the server's message to the user.

use thiserror::Error;

/// Errors produced by backend API calls.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (DNS, connect, timeout).
    #[error("transport error: {0}")]
    Transport(String),

    /// The backend answered with a non-success status code.
    #[error("request rejected (status {status}): {message}")]
    Rejected {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Error body returned by the backend, if any.
        message: String,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// No valid session token is available, or the backend revoked it.
    #[error("not authenticated")]
    NotAuthenticated,
}

impl ApiError {
    /// Creates a rejection error from a status code and server message.
    #[must_use]
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    /// Returns true if the failure is worth retrying as-is.
    ///
    /// Transport errors and 5xx/429 rejections are transient; everything
    /// else reflects the request itself and will fail again unchanged.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Rejected { status, .. } => *status == 429 || (500..600).contains(status),
            Self::Decode(_) | Self::NotAuthenticated => false,
        }
    }
}

#[cfg(feature = "rest")]
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// Errors produced by the pipeline board itself.
///
/// A load failure is blocking: the board shows no grouping until a retry
/// succeeds. A rejected move is *not* represented here because it is
/// recoverable in place; only a failed resync after a rejected move
/// escalates to an error.
#[derive(Debug, Clone, Error)]
pub enum BoardError {
    /// The initial stage or item fetch failed; no grouping is available.
    #[error("board load failed: {0}")]
    LoadFailed(#[source] ApiError),

    /// The wholesale item re-fetch after a rejected move failed.
    #[error("resync after rejected move failed: {0}")]
    ResyncFailed(#[source] ApiError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_display() {
        let err = ApiError::rejected(422, "stage does not accept applications");
        assert_eq!(
            err.to_string(),
            "request rejected (status 422): stage does not accept applications"
        );
    }

    #[test]
    fn test_transient_classification() {
        assert!(ApiError::Transport("connection refused".into()).is_transient());
        assert!(ApiError::rejected(503, "down").is_transient());
        assert!(ApiError::rejected(429, "slow down").is_transient());
        assert!(!ApiError::rejected(404, "missing").is_transient());
        assert!(!ApiError::Decode("bad json".into()).is_transient());
        assert!(!ApiError::NotAuthenticated.is_transient());
    }

    #[test]
    fn test_board_error_source() {
        let err = BoardError::LoadFailed(ApiError::rejected(500, "boom"));
        assert!(err.to_string().contains("board load failed"));
    }
}
