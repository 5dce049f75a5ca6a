//! Client console use-cases.
//!
//! The listing screen tolerates missing data, so [`GetClientsUseCase`]
//! defaults to swallow-and-default. Mutations default to rethrow so the
//! console can react to the concrete failure.

use std::sync::Arc;

use hostal_core::types::DbId;
use hostal_repos::models::client::{Client, CreateClient, UpdateClient};
use hostal_repos::Repository;

use crate::policy::{self, FailurePolicy, UseCaseError};

/// Fetch all clients for the listing screen.
pub struct GetClientsUseCase<R> {
    repo: Arc<R>,
    on_failure: FailurePolicy,
}

impl<R: Repository<Client, CreateClient, UpdateClient>> GetClientsUseCase<R> {
    /// Console default: a failed fetch resolves to an empty list.
    pub fn new(repo: Arc<R>) -> Self {
        Self::with_policy(repo, FailurePolicy::EmptyDefault)
    }

    pub fn with_policy(repo: Arc<R>, on_failure: FailurePolicy) -> Self {
        Self { repo, on_failure }
    }

    pub async fn execute(&self) -> Result<Vec<Client>, UseCaseError> {
        policy::resolve(self.repo.list().await, self.on_failure, "get_clients")
    }
}

/// Fetch one client by id.
pub struct GetClientByIdUseCase<R> {
    repo: Arc<R>,
    on_failure: FailurePolicy,
}

impl<R: Repository<Client, CreateClient, UpdateClient>> GetClientByIdUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self::with_policy(repo, FailurePolicy::Rethrow)
    }

    pub fn with_policy(repo: Arc<R>, on_failure: FailurePolicy) -> Self {
        Self { repo, on_failure }
    }

    /// Resolves to `None` when the client does not exist.
    pub async fn execute(&self, id: DbId) -> Result<Option<Client>, UseCaseError> {
        policy::resolve(
            self.repo.find_by_id(id).await,
            self.on_failure,
            "get_client_by_id",
        )
    }
}

/// Register a new client.
pub struct CreateClientUseCase<R> {
    repo: Arc<R>,
    on_failure: FailurePolicy,
}

impl<R: Repository<Client, CreateClient, UpdateClient>> CreateClientUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self::with_policy(repo, FailurePolicy::Rethrow)
    }

    pub fn with_policy(repo: Arc<R>, on_failure: FailurePolicy) -> Self {
        Self { repo, on_failure }
    }

    pub async fn execute(&self, dto: &CreateClient) -> Result<Client, UseCaseError> {
        policy::resolve_required(self.repo.create(dto).await, self.on_failure, "create_client")
    }
}

/// Patch a client's descriptive fields.
pub struct UpdateClientUseCase<R> {
    repo: Arc<R>,
    on_failure: FailurePolicy,
}

impl<R: Repository<Client, CreateClient, UpdateClient>> UpdateClientUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self::with_policy(repo, FailurePolicy::Rethrow)
    }

    pub fn with_policy(repo: Arc<R>, on_failure: FailurePolicy) -> Self {
        Self { repo, on_failure }
    }

    pub async fn execute(&self, id: DbId, dto: &UpdateClient) -> Result<Option<Client>, UseCaseError> {
        policy::resolve(
            self.repo.update(id, dto).await,
            self.on_failure,
            "update_client",
        )
    }
}

/// Delete a client. Destructive: the caller must see the real failure.
pub struct DeleteClientUseCase<R> {
    repo: Arc<R>,
    on_failure: FailurePolicy,
}

impl<R: Repository<Client, CreateClient, UpdateClient>> DeleteClientUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self::with_policy(repo, FailurePolicy::Rethrow)
    }

    pub fn with_policy(repo: Arc<R>, on_failure: FailurePolicy) -> Self {
        Self { repo, on_failure }
    }

    /// Resolves to `true` when the backend removed the client.
    pub async fn execute(&self, id: DbId) -> Result<bool, UseCaseError> {
        policy::resolve(self.repo.delete(id).await, self.on_failure, "delete_client")
    }
}
