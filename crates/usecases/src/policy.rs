//! Failure policies applied by every use-case.
//!
//! Three policies exist across the consoles, and each use-case declares
//! its own at construction time instead of hard-coding the behavior:
//!
//! - [`FailurePolicy::EmptyDefault`] — log and resolve to the result
//!   type's default (empty list, `None`, `false`). Used on list screens
//!   where missing data is tolerable. Note: an empty result is then
//!   indistinguishable from "no data"; this masking is deliberate and
//!   documented, not a bug to fix here.
//! - [`FailurePolicy::Rethrow`] — log and propagate the original
//!   [`ApiError`] unchanged, for callers that must react (destructive
//!   operations).
//! - [`FailurePolicy::Wrap`] — log the technical failure, then replace
//!   it with a fixed user-facing message carried as
//!   [`DomainError::Message`].
//!
//! Logging goes through the `tracing` facade, so tests run without
//! capturing output streams and binaries pick the subscriber.

use hostal_api_client::ApiError;
use hostal_core::error::DomainError;

/// Failure policy declared per use-case at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Log, then resolve to the result type's default value.
    EmptyDefault,
    /// Log, then propagate the original error unchanged.
    Rethrow,
    /// Log, then fail with this fixed user-facing message.
    Wrap(&'static str),
}

/// Error raised by a use-case.
#[derive(Debug, thiserror::Error)]
pub enum UseCaseError {
    /// The original client error, forwarded unchanged (rethrow-raw).
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A user-facing domain error (wrap-and-throw).
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Apply a failure policy to an operation result.
///
/// `operation` names the use-case in log output, e.g. `"get_tables"`.
pub fn resolve<T: Default>(
    result: Result<T, ApiError>,
    policy: FailurePolicy,
    operation: &'static str,
) -> Result<T, UseCaseError> {
    match result {
        Ok(value) => Ok(value),
        Err(err) => match policy {
            FailurePolicy::EmptyDefault => {
                tracing::warn!(operation, error = %err, "Repository call failed, returning default");
                Ok(T::default())
            }
            FailurePolicy::Rethrow => {
                tracing::error!(operation, error = %err, "Repository call failed");
                Err(UseCaseError::Api(err))
            }
            FailurePolicy::Wrap(message) => {
                tracing::error!(operation, error = %err, "Repository call failed");
                Err(UseCaseError::Domain(DomainError::Message(
                    message.to_string(),
                )))
            }
        },
    }
}

/// Apply a failure policy to an operation whose result has no safe
/// default (create, cast).
///
/// [`FailurePolicy::EmptyDefault`] degrades to rethrow here: there is
/// no empty value to hand back for a single entity.
pub fn resolve_required<T>(
    result: Result<T, ApiError>,
    policy: FailurePolicy,
    operation: &'static str,
) -> Result<T, UseCaseError> {
    match result {
        Ok(value) => Ok(value),
        Err(err) => match policy {
            FailurePolicy::Wrap(message) => {
                tracing::error!(operation, error = %err, "Repository call failed");
                Err(UseCaseError::Domain(DomainError::Message(
                    message.to_string(),
                )))
            }
            FailurePolicy::EmptyDefault | FailurePolicy::Rethrow => {
                tracing::error!(operation, error = %err, "Repository call failed");
                Err(UseCaseError::Api(err))
            }
        },
    }
}
