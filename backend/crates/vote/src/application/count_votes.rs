//! Count Votes Use Case

use std::sync::Arc;

use crate::domain::entities::Votable;
use crate::domain::repository::VoteRepository;
use crate::error::VoteResult;

/// Count Votes Use Case
pub struct CountVotesUseCase<V>
where
    V: VoteRepository,
{
    vote_repo: Arc<V>,
}

impl<V> CountVotesUseCase<V>
where
    V: VoteRepository,
{
    pub fn new(vote_repo: Arc<V>) -> Self {
        Self { vote_repo }
    }

    /// Derived vote count of a located target
    pub async fn execute(&self, votable: &Votable) -> VoteResult<i64> {
        self.vote_repo.count_for_target(&votable.target()).await
    }
}
