//! Locate Target Use Case

use std::sync::Arc;

use crate::domain::entities::Votable;
use crate::domain::repository::TargetRepository;
use crate::domain::value_objects::TargetRef;
use crate::error::{VoteError, VoteResult};

/// Locate Target Use Case
pub struct LocateTargetUseCase<T>
where
    T: TargetRepository,
{
    target_repo: Arc<T>,
}

impl<T> LocateTargetUseCase<T>
where
    T: TargetRepository,
{
    pub fn new(target_repo: Arc<T>) -> Self {
        Self { target_repo }
    }

    pub async fn execute(&self, target: TargetRef) -> VoteResult<Votable> {
        if !self.target_repo.exists(&target).await? {
            tracing::debug!(target = %target, "Vote target not found");
            return Err(VoteError::TargetNotFound);
        }

        Ok(Votable::located(target))
    }
}
