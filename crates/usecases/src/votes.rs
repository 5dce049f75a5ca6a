//! Voting console use-cases.

use std::sync::Arc;

use hostal_repos::models::vote::{CastVote, Vote, VotingOption};
use hostal_repos::VotingBooth;

use crate::policy::{self, FailurePolicy, UseCaseError};

/// User-facing message when a vote cannot be recorded.
pub const MSG_CAST_VOTE: &str = "No se pudo registrar el voto";

/// Fetch the ballot. A failed fetch resolves to an empty ballot.
pub struct GetVotingOptionsUseCase<V> {
    booth: Arc<V>,
    on_failure: FailurePolicy,
}

impl<V: VotingBooth> GetVotingOptionsUseCase<V> {
    pub fn new(booth: Arc<V>) -> Self {
        Self::with_policy(booth, FailurePolicy::EmptyDefault)
    }

    pub fn with_policy(booth: Arc<V>, on_failure: FailurePolicy) -> Self {
        Self { booth, on_failure }
    }

    pub async fn execute(&self) -> Result<Vec<VotingOption>, UseCaseError> {
        policy::resolve(
            self.booth.voting_options().await,
            self.on_failure,
            "get_voting_options",
        )
    }
}

/// Record a vote.
pub struct CastVoteUseCase<V> {
    booth: Arc<V>,
    on_failure: FailurePolicy,
}

impl<V: VotingBooth> CastVoteUseCase<V> {
    /// Console default: any failure becomes [`MSG_CAST_VOTE`].
    pub fn new(booth: Arc<V>) -> Self {
        Self::with_policy(booth, FailurePolicy::Wrap(MSG_CAST_VOTE))
    }

    pub fn with_policy(booth: Arc<V>, on_failure: FailurePolicy) -> Self {
        Self { booth, on_failure }
    }

    pub async fn execute(&self, dto: &CastVote) -> Result<Vote, UseCaseError> {
        policy::resolve_required(self.booth.cast(dto).await, self.on_failure, "cast_vote")
    }
}
