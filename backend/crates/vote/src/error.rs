//! Vote Error Types
//!
//! This module provides vote-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Vote-specific result type alias
pub type VoteResult<T> = Result<T, VoteError>;

/// Vote-specific error variants
///
/// The `Display` strings of the caller-facing variants are the exact
/// messages returned in the `errors` array.
#[derive(Debug, Error)]
pub enum VoteError {
    /// Content-Type header missing or not the accepted media type
    #[error("Content-Type must be {0}")]
    UnsupportedContentType(String),

    /// Token header missing, blank, or not matching a valid token
    #[error("A valid user token is required")]
    Unauthenticated,

    /// Article or comment does not exist
    #[error("Target not found")]
    TargetNotFound,

    /// Vote does not exist
    #[error("Vote not found")]
    VoteNotFound,

    /// The (user, target) pair already has a vote
    #[error("You've already voted for this item")]
    AlreadyVoted,

    /// Requester did not cast the vote they tried to delete
    #[error("You may not delete others' votes")]
    NotVoteOwner,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl VoteError {
    /// Get the ErrorKind for this error
    ///
    /// A repeated vote maps to `BadRequest` rather than `Conflict`, which
    /// is the status clients of the votes API receive. Database errors are refined further by the
    /// kernel's sqlx conversion when rendered (e.g. pool exhaustion
    /// becomes 503).
    pub fn kind(&self) -> ErrorKind {
        match self {
            VoteError::UnsupportedContentType(_) => ErrorKind::UnsupportedMediaType,
            VoteError::Unauthenticated => ErrorKind::Unauthorized,
            VoteError::TargetNotFound | VoteError::VoteNotFound => ErrorKind::NotFound,
            VoteError::AlreadyVoted => ErrorKind::BadRequest,
            VoteError::NotVoteOwner => ErrorKind::Forbidden,
            VoteError::Database(_) | VoteError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            VoteError::Database(e) => {
                tracing::error!(error = %e, "Vote database error");
            }
            VoteError::Internal(msg) => {
                tracing::error!(message = %msg, "Vote internal error");
            }
            VoteError::NotVoteOwner => {
                tracing::warn!("Attempt to delete another user's vote");
            }
            _ => {
                tracing::debug!(error = %self, "Vote error");
            }
        }
    }
}

impl From<VoteError> for AppError {
    fn from(err: VoteError) -> Self {
        match err {
            VoteError::TargetNotFound | VoteError::VoteNotFound => AppError::not_found(),
            VoteError::Database(e) => AppError::from(e),
            // Internal details stay in the logs.
            VoteError::Internal(_) => AppError::internal("Internal server error"),
            VoteError::UnsupportedContentType(_) => {
                AppError::unsupported_media_type(err.to_string())
            }
            VoteError::Unauthenticated => AppError::unauthorized(err.to_string()),
            VoteError::AlreadyVoted => AppError::bad_request(err.to_string()),
            VoteError::NotVoteOwner => AppError::forbidden(err.to_string()),
        }
    }
}

impl IntoResponse for VoteError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
