//! Resource entities and DTOs.
//!
//! Each submodule contains:
//! - a `Serialize` + `Deserialize` entity struct matching the backend
//!   resource representation
//! - a create DTO carrying no identifier
//! - an all-`Option` update DTO for patches

pub mod client;
pub mod room;
pub mod table;
pub mod vote;
