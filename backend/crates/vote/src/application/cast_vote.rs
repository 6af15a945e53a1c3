//! Cast Vote Use Case

use kernel::id::VoteId;
use std::sync::Arc;

use crate::domain::entities::{NewVote, User, Votable};
use crate::domain::repository::VoteRepository;
use crate::error::{VoteError, VoteResult};

/// Output DTO for cast vote
#[derive(Debug, Clone)]
pub struct CastVoteOutput {
    pub vote_id: VoteId,
}

/// Cast Vote Use Case
pub struct CastVoteUseCase<V>
where
    V: VoteRepository,
{
    vote_repo: Arc<V>,
}

impl<V> CastVoteUseCase<V>
where
    V: VoteRepository,
{
    pub fn new(vote_repo: Arc<V>) -> Self {
        Self { vote_repo }
    }

    pub async fn execute(&self, user: &User, votable: &Votable) -> VoteResult<CastVoteOutput> {
        // The store enforces one vote per (user, target); a skipped insert
        // means someone (possibly a concurrent request) got there first.
        let vote = self
            .vote_repo
            .insert_unique(&NewVote::new(user, votable))
            .await?
            .ok_or_else(|| {
                tracing::debug!(
                    user_id = %user.id,
                    target = %votable.target(),
                    "Duplicate vote rejected"
                );
                VoteError::AlreadyVoted
            })?;

        tracing::info!(
            vote_id = %vote.id,
            user_id = %user.id,
            target = %vote.target,
            "Vote cast"
        );

        Ok(CastVoteOutput { vote_id: vote.id })
    }
}
