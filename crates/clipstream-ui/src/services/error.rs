//! Transport error taxonomy.
//!
//! # Design
//! - Four coarse kinds; optimistic reconciliation treats them all the
//!   same and callers only branch for display or session handling.
//! - Messages prefer the backend's own wording when a problem document
//!   can be decoded.

use thiserror::Error;

/// Coarse classification for a failed API call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Session missing, stale, or rejected.
    Unauthorized,
    /// Subject does not exist, or is gone.
    NotFound,
    /// Transport-level failure before any response arrived.
    Network,
    /// Any other non-success response.
    Server,
}

/// Failure reported by the API client.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    /// Coarse failure classification.
    pub kind: ApiErrorKind,
    /// Human-readable detail for logging and toasts.
    pub message: String,
}

impl ApiError {
    /// Build an error of the given kind.
    #[must_use]
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Build a transport-level error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Network, message)
    }
}

/// Map an HTTP status code to an error kind.
#[must_use]
pub const fn classify_status(status: u16) -> ApiErrorKind {
    match status {
        401 | 403 => ApiErrorKind::Unauthorized,
        404 => ApiErrorKind::NotFound,
        _ => ApiErrorKind::Server,
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiError, ApiErrorKind, classify_status};

    #[test]
    fn statuses_map_to_kinds() {
        assert_eq!(classify_status(401), ApiErrorKind::Unauthorized);
        assert_eq!(classify_status(403), ApiErrorKind::Unauthorized);
        assert_eq!(classify_status(404), ApiErrorKind::NotFound);
        assert_eq!(classify_status(500), ApiErrorKind::Server);
        assert_eq!(classify_status(502), ApiErrorKind::Server);
        assert_eq!(classify_status(418), ApiErrorKind::Server);
    }

    #[test]
    fn display_uses_the_message() {
        let err = ApiError::network("connection reset");
        assert_eq!(err.to_string(), "connection reset");
    }
}
