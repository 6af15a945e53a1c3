//! Vote Middleware
//!
//! Header checks that every write route performs before touching any
//! target or vote.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use platform::client::{extract_token, has_media_type};

use crate::application::ResolveCredentialUseCase;
use crate::domain::entities::User;
use crate::domain::repository::{CredentialRepository, TargetRepository, VoteRepository};
use crate::error::VoteError;
use crate::presentation::handlers::VoteAppState;

/// Authenticated user stored in request extensions
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser(pub User);

/// Middleware that requires the configured Content-Type
pub async fn require_content_type<R>(
    State(state): State<VoteAppState<R>>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, VoteError>
where
    R: CredentialRepository + TargetRepository + VoteRepository + Clone + Send + Sync + 'static,
{
    let expected = &state.config.accepted_content_type;

    if !has_media_type(req.headers(), expected) {
        return Err(VoteError::UnsupportedContentType(expected.clone()));
    }

    Ok(next.run(req).await)
}

/// Middleware that resolves the credential token into a [`CurrentUser`]
pub async fn require_user<R>(
    State(state): State<VoteAppState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, VoteError>
where
    R: CredentialRepository + TargetRepository + VoteRepository + Clone + Send + Sync + 'static,
{
    let token = extract_token(req.headers(), &state.config.token_header);

    let user = ResolveCredentialUseCase::new(state.repo.clone())
        .execute(token)
        .await?;

    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}
