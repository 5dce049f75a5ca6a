//! Domain error taxonomy for the use-case layer.
//!
//! [`DomainError`] carries user-facing failure information only. The
//! technical detail of a transport or backend failure stays in the HTTP
//! client's error type; when a use-case wraps a failure it deliberately
//! discards that detail and keeps a fixed message.

use crate::types::DbId;

/// User-facing error raised by the use-case layer.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// The requested entity does not exist on the backend.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input rejected before any remote call was made.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Fixed user-facing message replacing a remote failure.
    #[error("{0}")]
    Message(String),

    /// Unexpected failure with a sanitized description.
    #[error("Internal error: {0}")]
    Internal(String),
}
