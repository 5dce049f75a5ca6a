//! Normalized error taxonomy for backend calls.
//!
//! Every failure leaving [`ApiClient`](crate::client::ApiClient) is an
//! [`ApiError`]. Raw `reqwest::Error` values never cross the crate
//! boundary, so call sites handle exactly three failure shapes:
//! no response, bad status, or bad payload.

use serde::Deserialize;

/// Error returned by every client operation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// The request produced no response (DNS failure, connection
    /// refused, timeout).
    #[error("Connectivity error: {0}")]
    Connectivity(String),

    /// The backend answered with a non-2xx status code.
    #[error("Backend error ({status}): {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Human-readable message, parsed from the backend's JSON error
        /// envelope when present, raw body text otherwise.
        message: String,
        /// Optional validation details forwarded from the backend.
        details: Option<serde_json::Value>,
    },

    /// A payload could not be encoded or parsed.
    #[error("Decode error: {0}")]
    Decode(String),
}

/// Error envelope shape produced by the backend for non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<String>,
    code: Option<String>,
    details: Option<serde_json::Value>,
}

impl ApiError {
    /// Normalize a transport-level `reqwest` failure.
    ///
    /// Decode failures (`serde` inside reqwest's `json()`) map to
    /// [`ApiError::Decode`]; everything else produced no usable
    /// response and maps to [`ApiError::Connectivity`].
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Connectivity(err.to_string())
        }
    }

    /// Build a [`ApiError::Status`] from a non-2xx response body.
    ///
    /// Attempts to parse the backend's `{"error": ..., "code": ...,
    /// "details": ...}` envelope. Falls back to the raw body text, and
    /// to a plain `HTTP <status>` message when the body is empty.
    pub fn from_status(status: u16, body: &str) -> Self {
        if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
            if let Some(message) = envelope.error {
                let message = match envelope.code {
                    Some(code) => format!("{message} [{code}]"),
                    None => message,
                };
                return ApiError::Status {
                    status,
                    message,
                    details: envelope.details,
                };
            }
        }

        let trimmed = body.trim();
        let message = if trimmed.is_empty() {
            format!("HTTP {status}")
        } else {
            trimmed.to_string()
        };

        ApiError::Status {
            status,
            message,
            details: None,
        }
    }

    /// `true` when this is a backend 404 response.
    ///
    /// Repositories use this to map "missing entity" onto `Option::None`
    /// instead of an error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }

    /// HTTP status code carried by this error, if the backend answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
