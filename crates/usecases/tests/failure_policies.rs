//! Behavioural tests for the three failure policies.
//!
//! Exercises the use-case layer against stub repositories to verify:
//! - swallow-and-default resolves to an empty collection on any failure
//! - rethrow-raw forwards the original error unchanged
//! - wrap-and-throw replaces any failure with the fixed message
//! - successful results pass through untouched

use std::sync::Arc;

use assert_matches::assert_matches;
use async_trait::async_trait;
use chrono::Utc;

use hostal_api_client::ApiError;
use hostal_core::error::DomainError;
use hostal_core::types::DbId;
use hostal_repos::models::client::{Client, CreateClient, UpdateClient};
use hostal_repos::models::table::{CreateTable, Table, UpdateTable};
use hostal_repos::models::vote::{CastVote, Vote, VotingOption};
use hostal_repos::{Repository, TableDirectory, VotingBooth};
use hostal_usecases::clients::{DeleteClientUseCase, GetClientsUseCase};
use hostal_usecases::tables::{DeleteTableUseCase, GetTablesByRoomUseCase, GetTablesUseCase};
use hostal_usecases::votes::{CastVoteUseCase, GetVotingOptionsUseCase, MSG_CAST_VOTE};
use hostal_usecases::{FailurePolicy, UseCaseError};

// ---------------------------------------------------------------------------
// Stubs
// ---------------------------------------------------------------------------

fn sample_table(id: DbId) -> Table {
    let now = Utc::now();
    Table {
        id,
        room_id: Some(3),
        number: 7,
        seats: 4,
        available: true,
        created_at: now,
        updated_at: now,
    }
}

/// Repository stub that fails every operation with a clone of one error.
struct FailingRepo {
    error: ApiError,
}

impl FailingRepo {
    fn network_down() -> Self {
        Self {
            error: ApiError::Connectivity("network down".to_string()),
        }
    }
}

#[async_trait]
impl<E, C, U> Repository<E, C, U> for FailingRepo
where
    E: Send + Sync + 'static,
    C: Send + Sync + 'static,
    U: Send + Sync + 'static,
{
    async fn list(&self) -> Result<Vec<E>, ApiError> {
        Err(self.error.clone())
    }

    async fn find_by_id(&self, _id: DbId) -> Result<Option<E>, ApiError> {
        Err(self.error.clone())
    }

    async fn create(&self, _dto: &C) -> Result<E, ApiError> {
        Err(self.error.clone())
    }

    async fn update(&self, _id: DbId, _dto: &U) -> Result<Option<E>, ApiError> {
        Err(self.error.clone())
    }

    async fn delete(&self, _id: DbId) -> Result<bool, ApiError> {
        Err(self.error.clone())
    }
}

/// Table repository stub that answers from a fixed listing.
struct FixedTables {
    tables: Vec<Table>,
}

#[async_trait]
impl Repository<Table, CreateTable, UpdateTable> for FixedTables {
    async fn list(&self) -> Result<Vec<Table>, ApiError> {
        Ok(self.tables.clone())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Table>, ApiError> {
        Ok(self.tables.iter().find(|t| t.id == id).cloned())
    }

    async fn create(&self, dto: &CreateTable) -> Result<Table, ApiError> {
        let mut table = sample_table(99);
        table.room_id = dto.room_id;
        table.number = dto.number;
        table.seats = dto.seats;
        Ok(table)
    }

    async fn update(&self, id: DbId, _dto: &UpdateTable) -> Result<Option<Table>, ApiError> {
        Ok(self.tables.iter().find(|t| t.id == id).cloned())
    }

    async fn delete(&self, id: DbId) -> Result<bool, ApiError> {
        Ok(self.tables.iter().any(|t| t.id == id))
    }
}

#[async_trait]
impl TableDirectory for FixedTables {
    async fn list_by_room(&self, room_id: DbId) -> Result<Vec<Table>, ApiError> {
        Ok(self
            .tables
            .iter()
            .filter(|t| t.room_id == Some(room_id))
            .cloned()
            .collect())
    }
}

/// Voting stub failing every operation.
struct FailingBooth {
    error: ApiError,
}

#[async_trait]
impl VotingBooth for FailingBooth {
    async fn voting_options(&self) -> Result<Vec<VotingOption>, ApiError> {
        Err(self.error.clone())
    }

    async fn cast(&self, _dto: &CastVote) -> Result<Vote, ApiError> {
        Err(self.error.clone())
    }
}

// ---------------------------------------------------------------------------
// Swallow-and-default
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_clients_swallows_connectivity_failure() {
    let repo: Arc<FailingRepo> = Arc::new(FailingRepo::network_down());
    let clients: Vec<Client> = GetClientsUseCase::new(repo).execute().await.unwrap();
    assert!(clients.is_empty());
}

#[tokio::test]
async fn get_clients_swallows_backend_failure_too() {
    // Any failure reason resolves to the same empty default.
    let repo = Arc::new(FailingRepo {
        error: ApiError::from_status(500, "boom"),
    });
    let clients = GetClientsUseCase::new(repo).execute().await.unwrap();
    assert!(clients.is_empty());
}

#[tokio::test]
async fn get_voting_options_swallows_failure() {
    let booth = Arc::new(FailingBooth {
        error: ApiError::Decode("bad json".to_string()),
    });
    let options = GetVotingOptionsUseCase::new(booth).execute().await.unwrap();
    assert!(options.is_empty());
}

// ---------------------------------------------------------------------------
// Rethrow-raw
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_client_rethrows_the_original_error() {
    let repo = Arc::new(FailingRepo::network_down());
    let result = DeleteClientUseCase::new(repo).execute(5).await;

    assert_matches!(result, Err(UseCaseError::Api(ApiError::Connectivity(msg))) => {
        assert_eq!(msg, "network down");
    });
}

#[tokio::test]
async fn delete_table_rethrows_the_original_error() {
    let repo = Arc::new(FailingRepo::network_down());
    let result = DeleteTableUseCase::new(repo).execute(5).await;

    assert_matches!(result, Err(UseCaseError::Api(ApiError::Connectivity(msg))) => {
        assert_eq!(msg, "network down");
    });
}

#[tokio::test]
async fn delete_table_resolves_true_when_repo_deletes() {
    let repo = Arc::new(FixedTables {
        tables: vec![sample_table(5)],
    });
    assert!(DeleteTableUseCase::new(repo).execute(5).await.unwrap());
}

// ---------------------------------------------------------------------------
// Wrap-and-throw
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_tables_wraps_connectivity_failure_with_fixed_message() {
    let repo = Arc::new(FailingRepo::network_down());
    let result = GetTablesUseCase::new(repo).execute().await;

    assert_matches!(result, Err(UseCaseError::Domain(DomainError::Message(msg))) => {
        assert_eq!(msg, "No se pudieron obtener las mesas");
    });
}

#[tokio::test]
async fn get_tables_wraps_any_failure_with_the_same_message() {
    // The wrapped message never varies with the underlying cause.
    for error in [
        ApiError::from_status(503, "upstream unavailable"),
        ApiError::Decode("truncated body".to_string()),
    ] {
        let repo = Arc::new(FailingRepo { error });
        let result = GetTablesUseCase::new(repo).execute().await;
        assert_matches!(result, Err(UseCaseError::Domain(DomainError::Message(msg))) => {
            assert_eq!(msg, "No se pudieron obtener las mesas");
        });
    }
}

#[tokio::test]
async fn cast_vote_wraps_failure_with_fixed_message() {
    let booth = Arc::new(FailingBooth {
        error: ApiError::Connectivity("refused".to_string()),
    });
    let dto = CastVote {
        option_id: 2,
        client_id: None,
    };
    let result = CastVoteUseCase::new(booth).execute(&dto).await;

    assert_matches!(result, Err(UseCaseError::Domain(DomainError::Message(msg))) => {
        assert_eq!(msg, MSG_CAST_VOTE);
    });
}

// ---------------------------------------------------------------------------
// Success passthrough and declared policies
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_tables_passes_the_listing_through_unchanged() {
    let tables = vec![sample_table(1)];
    let repo = Arc::new(FixedTables {
        tables: tables.clone(),
    });
    let resolved = GetTablesUseCase::new(repo).execute().await.unwrap();
    assert_eq!(resolved, tables);
}

#[tokio::test]
async fn get_tables_by_room_filters_on_room() {
    let mut other_room = sample_table(2);
    other_room.room_id = Some(9);
    let repo = Arc::new(FixedTables {
        tables: vec![sample_table(1), other_room],
    });

    let resolved = GetTablesByRoomUseCase::new(repo).execute(3).await.unwrap();
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].id, 1);
}

#[tokio::test]
async fn declared_policy_overrides_the_console_default() {
    // The tables console wraps by default, but the policy is declared
    // at construction, not hard-coded in the class.
    let repo = Arc::new(FailingRepo::network_down());
    let result = GetTablesUseCase::with_policy(repo, FailurePolicy::Rethrow)
        .execute()
        .await;

    assert_matches!(result, Err(UseCaseError::Api(ApiError::Connectivity(msg))) => {
        assert_eq!(msg, "network down");
    });
}
