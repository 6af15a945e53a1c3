//! Vote Router

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, post},
};
use std::sync::Arc;

use crate::application::config::VoteConfig;
use crate::domain::repository::{CredentialRepository, TargetRepository, VoteRepository};
use crate::infra::postgres::PgVoteRepository;
use crate::presentation::handlers::{self, VoteAppState};
use crate::presentation::middleware::{require_content_type, require_user};

/// Create the vote router with PostgreSQL repository
pub fn vote_router(repo: PgVoteRepository, config: VoteConfig) -> Router {
    vote_router_generic(repo, config)
}

/// Create a generic vote router for any repository implementation
///
/// Write routes check Content-Type first, then the token, and only then
/// resolve targets or votes. The count routes are read-only and unguarded.
pub fn vote_router_generic<R>(repo: R, config: VoteConfig) -> Router
where
    R: CredentialRepository + TargetRepository + VoteRepository + Clone + Send + Sync + 'static,
{
    let state = VoteAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    // route_layer: the last layer added runs first.
    let user_guard = from_fn_with_state(state.clone(), require_user::<R>);
    let content_type_guard = from_fn_with_state(state.clone(), require_content_type::<R>);

    Router::new()
        .route(
            "/articles/{id}/votes",
            post(handlers::cast_article_vote::<R>)
                .route_layer(user_guard.clone())
                .route_layer(content_type_guard.clone())
                .get(handlers::article_vote_count::<R>),
        )
        .route(
            "/comments/{id}/votes",
            post(handlers::cast_comment_vote::<R>)
                .route_layer(user_guard.clone())
                .route_layer(content_type_guard.clone())
                .get(handlers::comment_vote_count::<R>),
        )
        .route(
            "/votes/{id}",
            delete(handlers::retract_vote::<R>)
                .route_layer(user_guard)
                .route_layer(content_type_guard),
        )
        .with_state(state)
}
