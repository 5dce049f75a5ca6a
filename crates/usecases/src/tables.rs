//! Table console ("mesas") use-cases.
//!
//! This console historically replaced every technical failure with a
//! fixed Spanish message for its operators, so its fetch and mutation
//! use-cases default to the wrap policy. Deleting a table is the
//! exception: destructive, the caller gets the original error.

use std::sync::Arc;

use hostal_core::types::DbId;
use hostal_repos::models::table::{CreateTable, Table, UpdateTable};
use hostal_repos::{Repository, TableDirectory};

use crate::policy::{self, FailurePolicy, UseCaseError};

/// User-facing message when the table listing cannot be fetched.
pub const MSG_GET_TABLES: &str = "No se pudieron obtener las mesas";

/// User-facing message when a table cannot be created.
pub const MSG_CREATE_TABLE: &str = "No se pudo crear la mesa";

/// User-facing message when a table cannot be updated.
pub const MSG_UPDATE_TABLE: &str = "No se pudo actualizar la mesa";

/// Fetch all tables.
pub struct GetTablesUseCase<R> {
    repo: Arc<R>,
    on_failure: FailurePolicy,
}

impl<R: Repository<Table, CreateTable, UpdateTable>> GetTablesUseCase<R> {
    /// Console default: any failure becomes [`MSG_GET_TABLES`].
    pub fn new(repo: Arc<R>) -> Self {
        Self::with_policy(repo, FailurePolicy::Wrap(MSG_GET_TABLES))
    }

    pub fn with_policy(repo: Arc<R>, on_failure: FailurePolicy) -> Self {
        Self { repo, on_failure }
    }

    pub async fn execute(&self) -> Result<Vec<Table>, UseCaseError> {
        policy::resolve(self.repo.list().await, self.on_failure, "get_tables")
    }
}

/// Fetch the tables placed in one room.
pub struct GetTablesByRoomUseCase<D> {
    directory: Arc<D>,
    on_failure: FailurePolicy,
}

impl<D: TableDirectory> GetTablesByRoomUseCase<D> {
    pub fn new(directory: Arc<D>) -> Self {
        Self::with_policy(directory, FailurePolicy::Wrap(MSG_GET_TABLES))
    }

    pub fn with_policy(directory: Arc<D>, on_failure: FailurePolicy) -> Self {
        Self {
            directory,
            on_failure,
        }
    }

    pub async fn execute(&self, room_id: DbId) -> Result<Vec<Table>, UseCaseError> {
        policy::resolve(
            self.directory.list_by_room(room_id).await,
            self.on_failure,
            "get_tables_by_room",
        )
    }
}

/// Create a table.
pub struct CreateTableUseCase<R> {
    repo: Arc<R>,
    on_failure: FailurePolicy,
}

impl<R: Repository<Table, CreateTable, UpdateTable>> CreateTableUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self::with_policy(repo, FailurePolicy::Wrap(MSG_CREATE_TABLE))
    }

    pub fn with_policy(repo: Arc<R>, on_failure: FailurePolicy) -> Self {
        Self { repo, on_failure }
    }

    pub async fn execute(&self, dto: &CreateTable) -> Result<Table, UseCaseError> {
        policy::resolve_required(self.repo.create(dto).await, self.on_failure, "create_table")
    }
}

/// Patch a table.
pub struct UpdateTableUseCase<R> {
    repo: Arc<R>,
    on_failure: FailurePolicy,
}

impl<R: Repository<Table, CreateTable, UpdateTable>> UpdateTableUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self::with_policy(repo, FailurePolicy::Wrap(MSG_UPDATE_TABLE))
    }

    pub fn with_policy(repo: Arc<R>, on_failure: FailurePolicy) -> Self {
        Self { repo, on_failure }
    }

    pub async fn execute(&self, id: DbId, dto: &UpdateTable) -> Result<Option<Table>, UseCaseError> {
        policy::resolve(self.repo.update(id, dto).await, self.on_failure, "update_table")
    }
}

/// Delete a table. The original error reaches the caller unchanged.
pub struct DeleteTableUseCase<R> {
    repo: Arc<R>,
    on_failure: FailurePolicy,
}

impl<R: Repository<Table, CreateTable, UpdateTable>> DeleteTableUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self::with_policy(repo, FailurePolicy::Rethrow)
    }

    pub fn with_policy(repo: Arc<R>, on_failure: FailurePolicy) -> Self {
        Self { repo, on_failure }
    }

    /// Resolves to `true` when the backend removed the table.
    pub async fn execute(&self, id: DbId) -> Result<bool, UseCaseError> {
        policy::resolve(self.repo.delete(id).await, self.on_failure, "delete_table")
    }
}
