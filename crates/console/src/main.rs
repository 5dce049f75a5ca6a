//! `hostal-console` -- backend connectivity smoke check.
//!
//! Wires the environment configuration, HTTP client, repositories, and
//! use-cases together, then lists every resource once and logs the
//! counts. Exits non-zero when the backend is unreachable.
//!
//! # Environment variables
//!
//! | Variable               | Required | Default                 | Description            |
//! |------------------------|----------|-------------------------|------------------------|
//! | `API_BASE_URL`         | no       | `http://localhost:3000` | Backend base URL       |
//! | `REQUEST_TIMEOUT_SECS` | no       | `30`                    | Per-request timeout    |

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hostal_api_client::{ApiClient, ApiConfig};
use hostal_repos::{ClientRepo, RoomRepo, TableRepo, VoteRepo};
use hostal_usecases::clients::GetClientsUseCase;
use hostal_usecases::rooms::GetRoomsUseCase;
use hostal_usecases::tables::GetTablesUseCase;
use hostal_usecases::votes::GetVotingOptionsUseCase;
use hostal_usecases::FailurePolicy;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hostal_console=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env();
    tracing::info!(base_url = %config.base_url, "Checking backend connectivity");

    let api = Arc::new(ApiClient::new(&config));

    // Rethrow on the first call so an unreachable backend fails the
    // smoke check instead of dissolving into an empty listing.
    let clients = GetClientsUseCase::with_policy(
        Arc::new(ClientRepo::clients(api.clone())),
        FailurePolicy::Rethrow,
    )
    .execute()
    .await?;
    tracing::info!(count = clients.len(), "Clients reachable");

    let rooms = GetRoomsUseCase::new(Arc::new(RoomRepo::rooms(api.clone())))
        .execute()
        .await?;
    tracing::info!(count = rooms.len(), "Rooms reachable");

    let tables = GetTablesUseCase::new(Arc::new(TableRepo::tables(api.clone())))
        .execute()
        .await?;
    tracing::info!(count = tables.len(), "Tables reachable");

    let options = GetVotingOptionsUseCase::new(Arc::new(VoteRepo::new(api)))
        .execute()
        .await?;
    tracing::info!(count = options.len(), "Voting options reachable");

    Ok(())
}
