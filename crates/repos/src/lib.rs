//! Entities, DTOs, and REST-backed repositories for the admin consoles.
//!
//! Each resource (client, room, table, vote) has an entity struct plus
//! create/update DTOs under [`models`], and reaches the backend through
//! the generic [`Repository`] capability port. [`rest`] provides the
//! single REST-backed implementation, parameterized per resource.
//!
//! This layer is stateless: entities live on the backend, and only
//! transient copies are held per call. There is no cache.

pub mod models;
pub mod port;
pub mod rest;

pub use port::{Repository, TableDirectory, VotingBooth};
pub use rest::{ClientRepo, RestRepository, RoomRepo, TableRepo, VoteRepo};
