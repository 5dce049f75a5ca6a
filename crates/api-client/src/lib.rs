//! Typed HTTP client shared by every feature repository.
//!
//! Provides a single entry point ([`ApiClient::request`]) for issuing
//! REST calls against the hostal backend and normalizing every failure
//! into the [`ApiError`] taxonomy. Repositories never see a raw
//! transport error.
//!
//! Single-attempt semantics only: no retries, no backoff, no caching.

pub mod client;
pub mod config;
pub mod error;

pub use client::{ApiClient, ApiResponse};
pub use config::{ApiConfig, RequestConfig};
pub use error::ApiError;
