//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, Path, State};
use kernel::id::VoteId;
use std::sync::Arc;

use crate::application::{
    CastVoteUseCase, CountVotesUseCase, LocateTargetUseCase, RetractVoteUseCase, VoteConfig,
};
use crate::domain::entities::User;
use crate::domain::repository::{CredentialRepository, TargetRepository, VoteRepository};
use crate::domain::value_objects::{TargetKind, TargetRef};
use crate::error::{VoteError, VoteResult};
use crate::presentation::dto::{VoteCountResponse, VoteCreatedResponse, VoteResponse};
use crate::presentation::middleware::CurrentUser;

/// Shared state for vote handlers
#[derive(Clone)]
pub struct VoteAppState<R>
where
    R: CredentialRepository + TargetRepository + VoteRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<VoteConfig>,
}

// ============================================================================
// Cast
// ============================================================================

/// POST /articles/{id}/votes
pub async fn cast_article_vote<R>(
    State(state): State<VoteAppState<R>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(raw_id): Path<String>,
) -> VoteResult<VoteResponse>
where
    R: CredentialRepository + TargetRepository + VoteRepository + Clone + Send + Sync + 'static,
{
    cast_vote(&state, &user, TargetKind::Article, &raw_id).await
}

/// POST /comments/{id}/votes
pub async fn cast_comment_vote<R>(
    State(state): State<VoteAppState<R>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(raw_id): Path<String>,
) -> VoteResult<VoteResponse>
where
    R: CredentialRepository + TargetRepository + VoteRepository + Clone + Send + Sync + 'static,
{
    cast_vote(&state, &user, TargetKind::Comment, &raw_id).await
}

async fn cast_vote<R>(
    state: &VoteAppState<R>,
    user: &User,
    kind: TargetKind,
    raw_id: &str,
) -> VoteResult<VoteResponse>
where
    R: CredentialRepository + TargetRepository + VoteRepository + Clone + Send + Sync + 'static,
{
    let target = TargetRef::parse(kind, raw_id).ok_or(VoteError::TargetNotFound)?;

    let votable = LocateTargetUseCase::new(state.repo.clone())
        .execute(target)
        .await?;

    let output = CastVoteUseCase::new(state.repo.clone())
        .execute(user, &votable)
        .await?;

    Ok(VoteResponse::Created(VoteCreatedResponse {
        id: output.vote_id,
    }))
}

// ============================================================================
// Retract
// ============================================================================

/// DELETE /votes/{id}
pub async fn retract_vote<R>(
    State(state): State<VoteAppState<R>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(raw_id): Path<String>,
) -> VoteResult<VoteResponse>
where
    R: CredentialRepository + TargetRepository + VoteRepository + Clone + Send + Sync + 'static,
{
    let vote_id = raw_id
        .parse::<VoteId>()
        .map_err(|_| VoteError::VoteNotFound)?;

    RetractVoteUseCase::new(state.repo.clone())
        .execute(&user, vote_id)
        .await?;

    Ok(VoteResponse::Deleted)
}

// ============================================================================
// Count
// ============================================================================

/// GET /articles/{id}/votes
pub async fn article_vote_count<R>(
    State(state): State<VoteAppState<R>>,
    Path(raw_id): Path<String>,
) -> VoteResult<Json<VoteCountResponse>>
where
    R: CredentialRepository + TargetRepository + VoteRepository + Clone + Send + Sync + 'static,
{
    vote_count(&state, TargetKind::Article, &raw_id).await
}

/// GET /comments/{id}/votes
pub async fn comment_vote_count<R>(
    State(state): State<VoteAppState<R>>,
    Path(raw_id): Path<String>,
) -> VoteResult<Json<VoteCountResponse>>
where
    R: CredentialRepository + TargetRepository + VoteRepository + Clone + Send + Sync + 'static,
{
    vote_count(&state, TargetKind::Comment, &raw_id).await
}

async fn vote_count<R>(
    state: &VoteAppState<R>,
    kind: TargetKind,
    raw_id: &str,
) -> VoteResult<Json<VoteCountResponse>>
where
    R: CredentialRepository + TargetRepository + VoteRepository + Clone + Send + Sync + 'static,
{
    let target = TargetRef::parse(kind, raw_id).ok_or(VoteError::TargetNotFound)?;

    let votable = LocateTargetUseCase::new(state.repo.clone())
        .execute(target)
        .await?;

    let count = CountVotesUseCase::new(state.repo.clone())
        .execute(&votable)
        .await?;

    Ok(Json(VoteCountResponse { count }))
}
