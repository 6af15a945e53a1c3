//! Retract Vote Use Case

use kernel::id::VoteId;
use std::sync::Arc;

use crate::domain::entities::User;
use crate::domain::repository::VoteRepository;
use crate::error::{VoteError, VoteResult};

/// Retract Vote Use Case
pub struct RetractVoteUseCase<V>
where
    V: VoteRepository,
{
    vote_repo: Arc<V>,
}

impl<V> RetractVoteUseCase<V>
where
    V: VoteRepository,
{
    pub fn new(vote_repo: Arc<V>) -> Self {
        Self { vote_repo }
    }

    pub async fn execute(&self, requester: &User, vote_id: VoteId) -> VoteResult<()> {
        let vote = self
            .vote_repo
            .find_by_id(vote_id)
            .await?
            .ok_or(VoteError::VoteNotFound)?;

        if !vote.is_owned_by(requester) {
            tracing::warn!(
                vote_id = %vote_id,
                owner_id = %vote.user_id,
                requester_id = %requester.id,
                "Vote deletion refused"
            );
            return Err(VoteError::NotVoteOwner);
        }

        // The delete is guarded by owner as well; losing a race with another
        // delete of the same vote leaves nothing to remove.
        if !self.vote_repo.delete_owned(vote_id, requester.id).await? {
            return Err(VoteError::VoteNotFound);
        }

        tracing::info!(
            vote_id = %vote_id,
            user_id = %requester.id,
            target = %vote.target,
            "Vote retracted"
        );

        Ok(())
    }
}
