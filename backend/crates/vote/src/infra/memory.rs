//! In-Memory Repository Implementation
//!
//! Mirrors the PostgreSQL schema semantics (unique (user, target) index,
//! owner-guarded deletes) behind a single lock. Used by tests and for
//! embedding the service without a database.

use chrono::{DateTime, Utc};
use kernel::id::{UserId, VoteId};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::entities::{NewVote, User, Vote};
use crate::domain::repository::{CredentialRepository, TargetRepository, VoteRepository};
use crate::domain::value_objects::{TargetKind, TargetRef};
use crate::error::{VoteError, VoteResult};

const TOKEN_BYTES: usize = 32;

/// In-memory repository; clones share the same store
#[derive(Clone, Default)]
pub struct MemoryVoteRepository {
    state: Arc<RwLock<MemoryState>>,
}

#[derive(Default)]
struct MemoryState {
    last_user_id: i64,
    last_article_id: i64,
    last_comment_id: i64,
    last_vote_id: i64,
    tokens: HashMap<[u8; 32], StoredToken>,
    targets: HashSet<TargetRef>,
    votes: BTreeMap<VoteId, Vote>,
    // Unique index on (user, target)
    pairs: HashMap<(UserId, TargetRef), VoteId>,
}

struct StoredToken {
    user_id: UserId,
    expires_at: Option<DateTime<Utc>>,
}

impl MemoryVoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> VoteResult<RwLockReadGuard<'_, MemoryState>> {
        self.state
            .read()
            .map_err(|_| VoteError::Internal("memory store lock poisoned".to_string()))
    }

    fn write(&self) -> VoteResult<RwLockWriteGuard<'_, MemoryState>> {
        self.state
            .write()
            .map_err(|_| VoteError::Internal("memory store lock poisoned".to_string()))
    }

    // ========================================================================
    // Fixtures (stand-ins for the account and content subsystems)
    // ========================================================================

    /// Register a new user
    pub fn register_user(&self) -> VoteResult<User> {
        let mut state = self.write()?;
        state.last_user_id += 1;
        Ok(User::new(UserId::new(state.last_user_id)))
    }

    /// Issue a non-expiring token for `user`
    pub fn issue_token(&self, user: &User) -> VoteResult<String> {
        self.store_token(user, None)
    }

    /// Issue a token that stops resolving at `expires_at`
    pub fn issue_expiring_token(
        &self,
        user: &User,
        expires_at: DateTime<Utc>,
    ) -> VoteResult<String> {
        self.store_token(user, Some(expires_at))
    }

    fn store_token(&self, user: &User, expires_at: Option<DateTime<Utc>>) -> VoteResult<String> {
        let token = platform::crypto::random_token(TOKEN_BYTES);
        self.write()?.tokens.insert(
            platform::crypto::token_digest(&token),
            StoredToken {
                user_id: user.id,
                expires_at,
            },
        );
        Ok(token)
    }

    /// Create an article and return its reference
    pub fn add_article(&self) -> VoteResult<TargetRef> {
        self.add_target(TargetKind::Article)
    }

    /// Create a comment and return its reference
    pub fn add_comment(&self) -> VoteResult<TargetRef> {
        self.add_target(TargetKind::Comment)
    }

    fn add_target(&self, kind: TargetKind) -> VoteResult<TargetRef> {
        let mut state = self.write()?;
        let id = match kind {
            TargetKind::Article => {
                state.last_article_id += 1;
                state.last_article_id
            }
            TargetKind::Comment => {
                state.last_comment_id += 1;
                state.last_comment_id
            }
        };
        let target = TargetRef::new(kind, id);
        state.targets.insert(target);
        Ok(target)
    }
}

impl CredentialRepository for MemoryVoteRepository {
    async fn find_user_by_token_digest(&self, digest: &[u8; 32]) -> VoteResult<Option<User>> {
        let now = Utc::now();
        let state = self.read()?;

        Ok(state
            .tokens
            .get(digest)
            .filter(|token| token.expires_at.is_none_or(|at| at > now))
            .map(|token| User::new(token.user_id)))
    }
}

impl TargetRepository for MemoryVoteRepository {
    async fn exists(&self, target: &TargetRef) -> VoteResult<bool> {
        Ok(self.read()?.targets.contains(target))
    }
}

impl VoteRepository for MemoryVoteRepository {
    async fn insert_unique(&self, vote: &NewVote) -> VoteResult<Option<Vote>> {
        let mut state = self.write()?;

        let key = (vote.user_id, vote.target);
        if state.pairs.contains_key(&key) {
            return Ok(None);
        }

        state.last_vote_id += 1;
        let stored = Vote {
            id: VoteId::new(state.last_vote_id),
            user_id: vote.user_id,
            target: vote.target,
            created_at: Utc::now(),
        };
        state.pairs.insert(key, stored.id);
        state.votes.insert(stored.id, stored.clone());

        Ok(Some(stored))
    }

    async fn find_by_id(&self, vote_id: VoteId) -> VoteResult<Option<Vote>> {
        Ok(self.read()?.votes.get(&vote_id).cloned())
    }

    async fn delete_owned(&self, vote_id: VoteId, owner: UserId) -> VoteResult<bool> {
        let mut state = self.write()?;

        let owned = state
            .votes
            .get(&vote_id)
            .is_some_and(|vote| vote.user_id == owner);
        if !owned {
            return Ok(false);
        }

        if let Some(vote) = state.votes.remove(&vote_id) {
            state.pairs.remove(&(vote.user_id, vote.target));
        }
        Ok(true)
    }

    async fn count_for_target(&self, target: &TargetRef) -> VoteResult<i64> {
        let state = self.read()?;
        let count = state
            .votes
            .values()
            .filter(|vote| vote.target == *target)
            .count();
        Ok(count as i64)
    }
}
