//! Voting models and DTOs.
//!
//! The voting console lists the configured options and records votes
//! cast by clients. Options are managed on the backend; this layer only
//! reads them.

use serde::{Deserialize, Serialize};

use hostal_core::types::{DbId, Timestamp};

/// A selectable option in an open vote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VotingOption {
    pub id: DbId,
    pub label: String,
    pub description: Option<String>,
    /// Display position within the ballot.
    pub position: i32,
}

/// A recorded vote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vote {
    pub id: DbId,
    pub option_id: DbId,
    /// Absent for anonymous ballots.
    pub client_id: Option<DbId>,
    pub cast_at: Timestamp,
}

/// DTO for casting a vote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastVote {
    pub option_id: DbId,
    pub client_id: Option<DbId>,
}
