//! Domain Entities
//!
//! Core business entities for the vote domain.

use chrono::{DateTime, Utc};
use kernel::id::{UserId, VoteId};

use crate::domain::value_objects::{TargetKind, TargetRef};

/// Authenticated user, as resolved from a credential token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
}

impl User {
    pub fn new(id: UserId) -> Self {
        Self { id }
    }
}

/// Handle to a target known to exist
///
/// Only the target locator (and the in-crate stores) can build one, so
/// holding a `Votable` means the lookup already succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Votable {
    target: TargetRef,
}

impl Votable {
    pub(crate) fn located(target: TargetRef) -> Self {
        Self { target }
    }

    pub fn target(&self) -> TargetRef {
        self.target
    }

    pub fn kind(&self) -> TargetKind {
        self.target.kind
    }

    pub fn id(&self) -> i64 {
        self.target.id
    }
}

/// Vote about to be inserted; the store assigns id and timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewVote {
    pub user_id: UserId,
    pub target: TargetRef,
}

impl NewVote {
    pub fn new(user: &User, votable: &Votable) -> Self {
        Self {
            user_id: user.id,
            target: votable.target(),
        }
    }
}

/// Vote entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub id: VoteId,
    pub user_id: UserId,
    pub target: TargetRef,
    pub created_at: DateTime<Utc>,
}

impl Vote {
    /// Check whether `user` cast this vote
    pub fn is_owned_by(&self, user: &User) -> bool {
        self.user_id == user.id
    }
}
