//! Repository Traits
//!
//! Interfaces for data persistence. Implementations live in the infra layer.

use kernel::id::{UserId, VoteId};

use crate::domain::entities::{NewVote, User, Vote};
use crate::domain::value_objects::TargetRef;
use crate::error::VoteResult;

/// Credential repository trait
///
/// Tokens are issued by the account subsystem; this side only reads them.
#[trait_variant::make(CredentialRepository: Send)]
pub trait LocalCredentialRepository {
    /// Find the user owning a currently-valid token with this digest
    async fn find_user_by_token_digest(&self, digest: &[u8; 32]) -> VoteResult<Option<User>>;
}

/// Target repository trait
#[trait_variant::make(TargetRepository: Send)]
pub trait LocalTargetRepository {
    /// Check whether the referenced article or comment exists
    async fn exists(&self, target: &TargetRef) -> VoteResult<bool>;
}

/// Vote repository trait
#[trait_variant::make(VoteRepository: Send)]
pub trait LocalVoteRepository {
    /// Insert a vote unless one already exists for its (user, target) pair
    ///
    /// Must be atomic with respect to concurrent inserts for the same pair.
    /// Returns `None` when the insert was skipped.
    async fn insert_unique(&self, vote: &NewVote) -> VoteResult<Option<Vote>>;

    /// Find vote by ID
    async fn find_by_id(&self, vote_id: VoteId) -> VoteResult<Option<Vote>>;

    /// Delete a vote if `owner` cast it; returns whether a row was removed
    async fn delete_owned(&self, vote_id: VoteId, owner: UserId) -> VoteResult<bool>;

    /// Number of live votes for a target
    async fn count_for_target(&self, target: &TargetRef) -> VoteResult<i64>;
}
