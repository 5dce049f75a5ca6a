//! Room console use-cases.

use std::sync::Arc;

use hostal_core::types::DbId;
use hostal_repos::models::room::{CreateRoom, Room, UpdateRoom};
use hostal_repos::Repository;

use crate::policy::{self, FailurePolicy, UseCaseError};

/// Fetch all rooms. A failed fetch resolves to an empty list.
pub struct GetRoomsUseCase<R> {
    repo: Arc<R>,
    on_failure: FailurePolicy,
}

impl<R: Repository<Room, CreateRoom, UpdateRoom>> GetRoomsUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self::with_policy(repo, FailurePolicy::EmptyDefault)
    }

    pub fn with_policy(repo: Arc<R>, on_failure: FailurePolicy) -> Self {
        Self { repo, on_failure }
    }

    pub async fn execute(&self) -> Result<Vec<Room>, UseCaseError> {
        policy::resolve(self.repo.list().await, self.on_failure, "get_rooms")
    }
}

/// Create a room.
pub struct CreateRoomUseCase<R> {
    repo: Arc<R>,
    on_failure: FailurePolicy,
}

impl<R: Repository<Room, CreateRoom, UpdateRoom>> CreateRoomUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self::with_policy(repo, FailurePolicy::Rethrow)
    }

    pub fn with_policy(repo: Arc<R>, on_failure: FailurePolicy) -> Self {
        Self { repo, on_failure }
    }

    pub async fn execute(&self, dto: &CreateRoom) -> Result<Room, UseCaseError> {
        policy::resolve_required(self.repo.create(dto).await, self.on_failure, "create_room")
    }
}

/// Patch a room.
pub struct UpdateRoomUseCase<R> {
    repo: Arc<R>,
    on_failure: FailurePolicy,
}

impl<R: Repository<Room, CreateRoom, UpdateRoom>> UpdateRoomUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self::with_policy(repo, FailurePolicy::Rethrow)
    }

    pub fn with_policy(repo: Arc<R>, on_failure: FailurePolicy) -> Self {
        Self { repo, on_failure }
    }

    pub async fn execute(&self, id: DbId, dto: &UpdateRoom) -> Result<Option<Room>, UseCaseError> {
        policy::resolve(self.repo.update(id, dto).await, self.on_failure, "update_room")
    }
}

/// Delete a room.
pub struct DeleteRoomUseCase<R> {
    repo: Arc<R>,
    on_failure: FailurePolicy,
}

impl<R: Repository<Room, CreateRoom, UpdateRoom>> DeleteRoomUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self::with_policy(repo, FailurePolicy::Rethrow)
    }

    pub fn with_policy(repo: Arc<R>, on_failure: FailurePolicy) -> Self {
        Self { repo, on_failure }
    }

    pub async fn execute(&self, id: DbId) -> Result<bool, UseCaseError> {
        policy::resolve(self.repo.delete(id).await, self.on_failure, "delete_room")
    }
}
