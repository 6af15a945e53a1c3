//! API DTOs (Data Transfer Objects)

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::id::VoteId;
use serde::Serialize;

/// Body for a created vote: `{"id": <voteId>}`
#[derive(Debug, Clone, Serialize)]
pub struct VoteCreatedResponse {
    pub id: VoteId,
}

/// Response for GET /{articles,comments}/{id}/votes
#[derive(Debug, Clone, Serialize)]
pub struct VoteCountResponse {
    pub count: i64,
}

/// Successful outcome of a vote write
///
/// `Deleted` carries no payload and renders as 200 with an empty body.
#[derive(Debug, Clone)]
pub enum VoteResponse {
    Created(VoteCreatedResponse),
    Deleted,
}

impl IntoResponse for VoteResponse {
    fn into_response(self) -> Response {
        match self {
            VoteResponse::Created(body) => (StatusCode::CREATED, Json(body)).into_response(),
            VoteResponse::Deleted => StatusCode::OK.into_response(),
        }
    }
}
