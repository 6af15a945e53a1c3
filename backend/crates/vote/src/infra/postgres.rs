//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{UserId, VoteId};
use sqlx::PgPool;

use crate::domain::entities::{NewVote, User, Vote};
use crate::domain::repository::{CredentialRepository, TargetRepository, VoteRepository};
use crate::domain::value_objects::{TargetKind, TargetRef};
use crate::error::{VoteError, VoteResult};

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgVoteRepository {
    pool: PgPool,
}

impl PgVoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl CredentialRepository for PgVoteRepository {
    async fn find_user_by_token_digest(&self, digest: &[u8; 32]) -> VoteResult<Option<User>> {
        let user_id = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT user_id
            FROM user_tokens
            WHERE token_hash = $1
              AND (expires_at IS NULL OR expires_at > NOW())
            "#,
        )
        .bind(digest.as_slice())
        .fetch_optional(&self.pool)
        .await?;

        Ok(user_id.map(|id| User::new(UserId::new(id))))
    }
}

impl TargetRepository for PgVoteRepository {
    async fn exists(&self, target: &TargetRef) -> VoteResult<bool> {
        let sql = match target.kind {
            TargetKind::Article => "SELECT EXISTS(SELECT 1 FROM articles WHERE article_id = $1)",
            TargetKind::Comment => "SELECT EXISTS(SELECT 1 FROM comments WHERE comment_id = $1)",
        };

        let exists = sqlx::query_scalar::<_, bool>(sql)
            .bind(target.id)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }
}

impl VoteRepository for PgVoteRepository {
    async fn insert_unique(&self, vote: &NewVote) -> VoteResult<Option<Vote>> {
        // votes_user_target_key makes the check-and-insert a single atomic
        // statement; a conflicting row yields no RETURNING row.
        let row = sqlx::query_as::<_, VoteRow>(
            r#"
            INSERT INTO votes (user_id, target_type, target_id)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, target_type, target_id) DO NOTHING
            RETURNING
                vote_id,
                user_id,
                target_type,
                target_id,
                created_at
            "#,
        )
        .bind(vote.user_id.get())
        .bind(vote.target.kind.as_str())
        .bind(vote.target.id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(r) => {
                let vote = r.into_vote()?;
                tracing::debug!(vote_id = %vote.id, "Vote row inserted");
                Ok(Some(vote))
            }
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, vote_id: VoteId) -> VoteResult<Option<Vote>> {
        let row = sqlx::query_as::<_, VoteRow>(
            r#"
            SELECT
                vote_id,
                user_id,
                target_type,
                target_id,
                created_at
            FROM votes
            WHERE vote_id = $1
            "#,
        )
        .bind(vote_id.get())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_vote()).transpose()
    }

    async fn delete_owned(&self, vote_id: VoteId, owner: UserId) -> VoteResult<bool> {
        let deleted = sqlx::query("DELETE FROM votes WHERE vote_id = $1 AND user_id = $2")
            .bind(vote_id.get())
            .bind(owner.get())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }

    async fn count_for_target(&self, target: &TargetRef) -> VoteResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM votes WHERE target_type = $1 AND target_id = $2",
        )
        .bind(target.kind.as_str())
        .bind(target.id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}

// Internal row types for sqlx mapping
#[derive(sqlx::FromRow)]
struct VoteRow {
    vote_id: i64,
    user_id: i64,
    target_type: String,
    target_id: i64,
    created_at: DateTime<Utc>,
}

impl VoteRow {
    fn into_vote(self) -> VoteResult<Vote> {
        let kind = self
            .target_type
            .parse::<TargetKind>()
            .map_err(|e| VoteError::Internal(e.to_string()))?;

        Ok(Vote {
            id: VoteId::new(self.vote_id),
            user_id: UserId::new(self.user_id),
            target: TargetRef::new(kind, self.target_id),
            created_at: self.created_at,
        })
    }
}
