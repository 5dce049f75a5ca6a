//! Shared types and the domain error taxonomy for the hostal admin consoles.
//!
//! This crate has zero internal dependencies so every other layer
//! (HTTP client, repositories, use-cases, console binary) can depend
//! on it without cycles.

pub mod error;
pub mod types;
