//! REST-backed repository implementation.
//!
//! [`RestRepository`] implements the generic [`Repository`] port once
//! for every resource, parameterized by the collection path. Resource
//! aliases ([`ClientRepo`], [`RoomRepo`], [`TableRepo`]) add their
//! constructors and any extra lookups; votes do not fit the CRUD shape
//! and get a bespoke [`VoteRepo`].
//!
//! Backend conventions assumed here:
//! - `GET    /{collection}`      -> JSON array of entities
//! - `GET    /{collection}/{id}` -> entity, or 404
//! - `POST   /{collection}`      -> created entity
//! - `PUT    /{collection}/{id}` -> updated entity, or 404
//! - `DELETE /{collection}/{id}` -> 204, or 404

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use hostal_api_client::{ApiClient, ApiError, RequestConfig};
use hostal_core::types::DbId;

use crate::models::client::{Client, CreateClient, UpdateClient};
use crate::models::room::{CreateRoom, Room, UpdateRoom};
use crate::models::table::{CreateTable, Table, UpdateTable};
use crate::models::vote::{CastVote, Vote, VotingOption};
use crate::port::{Repository, TableDirectory, VotingBooth};

// ---------------------------------------------------------------------------
// Generic REST repository
// ---------------------------------------------------------------------------

/// One REST-backed repository over a single resource collection.
pub struct RestRepository<E, C, U> {
    api: Arc<ApiClient>,
    collection: &'static str,
    _marker: PhantomData<fn() -> (E, C, U)>,
}

impl<E, C, U> RestRepository<E, C, U> {
    /// Build a repository over `collection` (e.g. `"tables"`).
    pub fn new(api: Arc<ApiClient>, collection: &'static str) -> Self {
        Self {
            api,
            collection,
            _marker: PhantomData,
        }
    }

    /// Path of a single entity within the collection.
    fn entity_path(&self, id: DbId) -> String {
        format!("{}/{}", self.collection, id)
    }
}

#[async_trait]
impl<E, C, U> Repository<E, C, U> for RestRepository<E, C, U>
where
    E: DeserializeOwned + Send + Sync + 'static,
    C: Serialize + Send + Sync + 'static,
    U: Serialize + Send + Sync + 'static,
{
    async fn list(&self) -> Result<Vec<E>, ApiError> {
        self.api.get_json(self.collection).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<E>, ApiError> {
        optional(self.api.get_json(&self.entity_path(id)).await)
    }

    async fn create(&self, dto: &C) -> Result<E, ApiError> {
        let body = encode_body(dto)?;
        self.api.post_json(self.collection, body).await
    }

    async fn update(&self, id: DbId, dto: &U) -> Result<Option<E>, ApiError> {
        let body = encode_body(dto)?;
        optional(self.api.put_json(&self.entity_path(id), body).await)
    }

    async fn delete(&self, id: DbId) -> Result<bool, ApiError> {
        deleted(self.api.delete_empty(&self.entity_path(id)).await)
    }
}

// ---------------------------------------------------------------------------
// Resource aliases and extras
// ---------------------------------------------------------------------------

/// REST repository for the client console.
pub type ClientRepo = RestRepository<Client, CreateClient, UpdateClient>;

impl ClientRepo {
    /// Repository over the `clients` collection. The backend excludes
    /// soft-deleted clients from listings.
    pub fn clients(api: Arc<ApiClient>) -> Self {
        Self::new(api, "clients")
    }
}

/// REST repository for the room console.
pub type RoomRepo = RestRepository<Room, CreateRoom, UpdateRoom>;

impl RoomRepo {
    /// Repository over the `rooms` collection.
    pub fn rooms(api: Arc<ApiClient>) -> Self {
        Self::new(api, "rooms")
    }
}

/// REST repository for the table console.
pub type TableRepo = RestRepository<Table, CreateTable, UpdateTable>;

impl TableRepo {
    /// Repository over the `tables` collection.
    pub fn tables(api: Arc<ApiClient>) -> Self {
        Self::new(api, "tables")
    }
}

#[async_trait]
impl TableDirectory for TableRepo {
    async fn list_by_room(&self, room_id: DbId) -> Result<Vec<Table>, ApiError> {
        let config = RequestConfig::get(self.collection).query("room_id", room_id.to_string());
        Ok(self.api.request(config).await?.data)
    }
}

// ---------------------------------------------------------------------------
// Votes
// ---------------------------------------------------------------------------

/// Repository for the voting console.
///
/// Voting is not CRUD-shaped (options are read-only, votes are
/// append-only), so this is a bespoke implementation of the
/// [`VotingBooth`] port rather than a [`RestRepository`] alias.
pub struct VoteRepo {
    api: Arc<ApiClient>,
}

impl VoteRepo {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl VotingBooth for VoteRepo {
    async fn voting_options(&self) -> Result<Vec<VotingOption>, ApiError> {
        self.api.get_json("voting-options").await
    }

    async fn cast(&self, dto: &CastVote) -> Result<Vote, ApiError> {
        let body = encode_body(dto)?;
        self.api.post_json("votes", body).await
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Encode a DTO as a JSON body.
fn encode_body<T: Serialize>(dto: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(dto).map_err(|e| ApiError::Decode(format!("request body: {e}")))
}

/// Map a backend 404 onto `None`, keeping every other failure.
fn optional<T>(result: Result<T, ApiError>) -> Result<Option<T>, ApiError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_not_found() => Ok(None),
        Err(err) => Err(err),
    }
}

/// Map a delete outcome onto the port's `bool` contract: success means
/// a row was removed, 404 means there was nothing to remove.
fn deleted(result: Result<(), ApiError>) -> Result<bool, ApiError> {
    match result {
        Ok(()) => Ok(true),
        Err(err) if err.is_not_found() => Ok(false),
        Err(err) => Err(err),
    }
}
