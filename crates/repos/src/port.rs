//! Repository capability ports.
//!
//! [`Repository`] is the single generic CRUD contract every resource
//! repository satisfies; use-cases depend on it rather than on a
//! concrete network implementation, so test doubles slot in without
//! touching the wire. Resource-specific operations that do not fit the
//! CRUD shape get their own narrow port ([`TableDirectory`],
//! [`VotingBooth`]).
//!
//! No ordering guarantee exists between concurrent calls; callers must
//! not assume responses arrive in request order.

use async_trait::async_trait;

use hostal_api_client::ApiError;
use hostal_core::types::DbId;

use crate::models::table::Table;
use crate::models::vote::{CastVote, Vote, VotingOption};

/// Generic CRUD capability over one backend resource collection.
///
/// Implementations are interchangeable: the REST-backed
/// [`RestRepository`](crate::rest::RestRepository) in production,
/// in-memory doubles in tests.
#[async_trait]
pub trait Repository<TEntity, TCreate, TUpdate>: Send + Sync {
    /// Fetch the full collection.
    async fn list(&self) -> Result<Vec<TEntity>, ApiError>;

    /// Fetch one entity by id. Resolves to `None` when the backend
    /// reports the entity missing (HTTP 404).
    async fn find_by_id(&self, id: DbId) -> Result<Option<TEntity>, ApiError>;

    /// Create an entity from a create DTO and return the stored row.
    async fn create(&self, dto: &TCreate) -> Result<TEntity, ApiError>;

    /// Patch an entity. Resolves to `None` when the entity is missing.
    async fn update(&self, id: DbId, dto: &TUpdate) -> Result<Option<TEntity>, ApiError>;

    /// Delete an entity. Resolves to `true` when the backend removed a
    /// row, `false` when there was nothing to remove.
    async fn delete(&self, id: DbId) -> Result<bool, ApiError>;
}

/// Table lookups beyond plain CRUD.
#[async_trait]
pub trait TableDirectory: Send + Sync {
    /// Fetch the tables placed in a specific room.
    async fn list_by_room(&self, room_id: DbId) -> Result<Vec<Table>, ApiError>;
}

/// Voting operations: read the ballot, record a vote.
#[async_trait]
pub trait VotingBooth: Send + Sync {
    /// Fetch the configured voting options in display order.
    async fn voting_options(&self) -> Result<Vec<VotingOption>, ApiError>;

    /// Record a vote and return the stored row.
    async fn cast(&self, dto: &CastVote) -> Result<Vote, ApiError>;
}
