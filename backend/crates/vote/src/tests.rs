//! Unit tests for vote crate

#[cfg(test)]
mod config_tests {
    use crate::application::config::*;

    #[test]
    fn test_default_config() {
        let config = VoteConfig::default();

        assert_eq!(config.token_header, "x-user-token");
        assert_eq!(config.accepted_content_type, "application/json");
    }

    #[test]
    fn test_token_header_override_is_lowercased() {
        let config = VoteConfig::default().with_token_header("X-Api-Token");

        assert_eq!(config.token_header, "x-api-token");
        assert_eq!(config.accepted_content_type, "application/json");
    }
}

#[cfg(test)]
mod models_tests {
    use crate::presentation::dto::*;
    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use kernel::id::VoteId;

    #[test]
    fn test_created_response_serialization() {
        let response = VoteCreatedResponse {
            id: VoteId::new(17),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"id":17}"#);
    }

    #[test]
    fn test_count_response_serialization() {
        let json = serde_json::to_string(&VoteCountResponse { count: 3 }).unwrap();
        assert_eq!(json, r#"{"count":3}"#);
    }

    #[tokio::test]
    async fn test_deleted_has_no_body() {
        let response = VoteResponse::Deleted.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_created_status_and_body() {
        let response = VoteResponse::Created(VoteCreatedResponse {
            id: VoteId::new(4),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 4 }));
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::*;
    use kernel::error::{app_error::AppError, kind::ErrorKind};
    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(VoteError, StatusCode)> = vec![
            (
                VoteError::UnsupportedContentType("application/json".into()),
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ),
            (VoteError::Unauthenticated, StatusCode::UNAUTHORIZED),
            (VoteError::TargetNotFound, StatusCode::NOT_FOUND),
            (VoteError::VoteNotFound, StatusCode::NOT_FOUND),
            (VoteError::AlreadyVoted, StatusCode::BAD_REQUEST),
            (VoteError::NotVoteOwner, StatusCode::FORBIDDEN),
            (
                VoteError::Internal("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                VoteError::Database(sqlx::Error::PoolTimedOut),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
        ];

        for (error, expected_status) in test_cases {
            let response = error.into_response();
            assert_eq!(
                response.status(),
                expected_status,
                "Error should return correct status code"
            );
        }
    }

    #[test]
    fn test_status_code_follows_kind() {
        assert_eq!(VoteError::AlreadyVoted.status_code(), 400);
        assert_eq!(VoteError::Unauthenticated.status_code(), 401);
        assert_eq!(VoteError::NotVoteOwner.status_code(), 403);
        assert_eq!(VoteError::VoteNotFound.status_code(), 404);
        assert_eq!(
            VoteError::UnsupportedContentType("application/json".into()).status_code(),
            415
        );
    }

    #[test]
    fn test_app_error_conversion_keeps_kind_and_message() {
        let test_cases = [
            (
                VoteError::UnsupportedContentType("application/json".into()),
                ErrorKind::UnsupportedMediaType,
            ),
            (VoteError::Unauthenticated, ErrorKind::Unauthorized),
            (VoteError::AlreadyVoted, ErrorKind::BadRequest),
            (VoteError::NotVoteOwner, ErrorKind::Forbidden),
        ];

        for (error, expected_kind) in test_cases {
            let message = error.to_string();
            let app_error = AppError::from(error);
            assert_eq!(app_error.kind(), expected_kind);
            assert_eq!(app_error.message(), Some(message.as_str()));
        }

        let app_error = AppError::from(VoteError::TargetNotFound);
        assert_eq!(app_error.kind(), ErrorKind::NotFound);
        assert_eq!(app_error.message(), None);
    }

    async fn body_of(error: VoteError) -> axum::body::Bytes {
        to_bytes(error.into_response().into_body(), usize::MAX)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_caller_facing_messages_are_exact() {
        let body = body_of(VoteError::AlreadyVoted).await;
        assert_eq!(
            &body[..],
            br#"{"errors":["You've already voted for this item"]}"#
        );

        let body = body_of(VoteError::NotVoteOwner).await;
        assert_eq!(
            &body[..],
            br#"{"errors":["You may not delete others' votes"]}"#
        );
    }

    #[tokio::test]
    async fn test_not_found_has_no_body() {
        assert!(body_of(VoteError::TargetNotFound).await.is_empty());
        assert!(body_of(VoteError::VoteNotFound).await.is_empty());
    }

    #[tokio::test]
    async fn test_internal_error_detail_is_not_leaked() {
        let body = body_of(VoteError::Internal("lock poisoned".into())).await;
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(!text.contains("lock poisoned"));
    }
}

#[cfg(test)]
mod use_case_tests {
    use crate::application::*;
    use crate::domain::entities::Votable;
    use crate::domain::repository::VoteRepository;
    use crate::domain::value_objects::TargetRef;
    use crate::error::VoteError;
    use crate::infra::memory::MemoryVoteRepository;
    use chrono::{Duration, Utc};
    use kernel::id::VoteId;
    use std::sync::Arc;

    fn setup() -> Arc<MemoryVoteRepository> {
        Arc::new(MemoryVoteRepository::new())
    }

    async fn locate(repo: &Arc<MemoryVoteRepository>, target: TargetRef) -> Votable {
        LocateTargetUseCase::new(repo.clone())
            .execute(target)
            .await
            .unwrap()
    }

    async fn count(repo: &Arc<MemoryVoteRepository>, votable: &Votable) -> i64 {
        CountVotesUseCase::new(repo.clone())
            .execute(votable)
            .await
            .unwrap()
    }

    // ------------------------------------------------------------------------
    // Credential resolution
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_resolve_valid_token() {
        let repo = setup();
        let user = repo.register_user().unwrap();
        let token = repo.issue_token(&user).unwrap();

        let resolved = ResolveCredentialUseCase::new(repo.clone())
            .execute(Some(&token))
            .await
            .unwrap();
        assert_eq!(resolved, user);
    }

    #[tokio::test]
    async fn test_resolve_rejects_missing_blank_and_unknown() {
        let repo = setup();
        let use_case = ResolveCredentialUseCase::new(repo.clone());

        for raw in [None, Some(""), Some("   "), Some("not-a-token")] {
            let result = use_case.execute(raw).await;
            assert!(matches!(result, Err(VoteError::Unauthenticated)));
        }
    }

    #[tokio::test]
    async fn test_resolve_requires_exact_token_value() {
        let repo = setup();
        let user = repo.register_user().unwrap();
        let token = repo.issue_token(&user).unwrap();
        let use_case = ResolveCredentialUseCase::new(repo.clone());

        for padded in [format!(" {token}"), format!("{token} "), format!("\t{token}")] {
            let result = use_case.execute(Some(&padded)).await;
            assert!(matches!(result, Err(VoteError::Unauthenticated)));
        }
        assert_eq!(use_case.execute(Some(&token)).await.unwrap(), user);
    }

    #[tokio::test]
    async fn test_resolve_rejects_expired_token() {
        let repo = setup();
        let user = repo.register_user().unwrap();
        let expired = repo
            .issue_expiring_token(&user, Utc::now() - Duration::minutes(1))
            .unwrap();
        let fresh = repo
            .issue_expiring_token(&user, Utc::now() + Duration::hours(1))
            .unwrap();

        let use_case = ResolveCredentialUseCase::new(repo.clone());
        assert!(matches!(
            use_case.execute(Some(&expired)).await,
            Err(VoteError::Unauthenticated)
        ));
        assert_eq!(use_case.execute(Some(&fresh)).await.unwrap(), user);
    }

    // ------------------------------------------------------------------------
    // Target location
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_locate_missing_target() {
        let repo = setup();
        let use_case = LocateTargetUseCase::new(repo.clone());

        let result = use_case.execute(TargetRef::article(1)).await;
        assert!(matches!(result, Err(VoteError::TargetNotFound)));
    }

    #[tokio::test]
    async fn test_locate_is_kind_specific() {
        let repo = setup();
        let article = repo.add_article().unwrap();
        let use_case = LocateTargetUseCase::new(repo.clone());

        let votable = use_case.execute(article).await.unwrap();
        assert_eq!(votable.target(), article);

        // Comment 1 does not exist even though article 1 does
        let result = use_case.execute(TargetRef::comment(article.id)).await;
        assert!(matches!(result, Err(VoteError::TargetNotFound)));
    }

    // ------------------------------------------------------------------------
    // Cast
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_cast_vote_increments_count() {
        let repo = setup();
        let user = repo.register_user().unwrap();
        let votable = locate(&repo, repo.add_article().unwrap()).await;

        assert_eq!(count(&repo, &votable).await, 0);

        let output = CastVoteUseCase::new(repo.clone())
            .execute(&user, &votable)
            .await
            .unwrap();

        assert_eq!(count(&repo, &votable).await, 1);
        let stored = repo.find_by_id(output.vote_id).await.unwrap().unwrap();
        assert_eq!(stored.user_id, user.id);
        assert_eq!(stored.target, votable.target());
    }

    #[tokio::test]
    async fn test_cast_twice_conflicts_without_mutation() {
        let repo = setup();
        let user = repo.register_user().unwrap();
        let votable = locate(&repo, repo.add_comment().unwrap()).await;
        let use_case = CastVoteUseCase::new(repo.clone());

        use_case.execute(&user, &votable).await.unwrap();
        let result = use_case.execute(&user, &votable).await;

        assert!(matches!(result, Err(VoteError::AlreadyVoted)));
        assert_eq!(count(&repo, &votable).await, 1);
    }

    #[tokio::test]
    async fn test_same_user_may_vote_on_article_and_comment_with_same_id() {
        let repo = setup();
        let user = repo.register_user().unwrap();
        let article = locate(&repo, repo.add_article().unwrap()).await;
        let comment = locate(&repo, repo.add_comment().unwrap()).await;
        assert_eq!(article.id(), comment.id());

        let use_case = CastVoteUseCase::new(repo.clone());
        let first = use_case.execute(&user, &article).await.unwrap();
        let second = use_case.execute(&user, &comment).await.unwrap();

        assert!(first.vote_id < second.vote_id);
    }

    #[tokio::test]
    async fn test_distinct_users_vote_on_same_target() {
        let repo = setup();
        let votable = locate(&repo, repo.add_article().unwrap()).await;
        let use_case = CastVoteUseCase::new(repo.clone());

        for _ in 0..3 {
            let user = repo.register_user().unwrap();
            use_case.execute(&user, &votable).await.unwrap();
        }

        assert_eq!(count(&repo, &votable).await, 3);
    }

    // ------------------------------------------------------------------------
    // Retract
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_retract_own_vote() {
        let repo = setup();
        let user = repo.register_user().unwrap();
        let votable = locate(&repo, repo.add_article().unwrap()).await;
        let cast = CastVoteUseCase::new(repo.clone())
            .execute(&user, &votable)
            .await
            .unwrap();

        RetractVoteUseCase::new(repo.clone())
            .execute(&user, cast.vote_id)
            .await
            .unwrap();

        assert!(repo.find_by_id(cast.vote_id).await.unwrap().is_none());
        assert_eq!(count(&repo, &votable).await, 0);
    }

    #[tokio::test]
    async fn test_retract_others_vote_is_forbidden() {
        let repo = setup();
        let owner = repo.register_user().unwrap();
        let intruder = repo.register_user().unwrap();
        let votable = locate(&repo, repo.add_article().unwrap()).await;
        let cast = CastVoteUseCase::new(repo.clone())
            .execute(&owner, &votable)
            .await
            .unwrap();

        let result = RetractVoteUseCase::new(repo.clone())
            .execute(&intruder, cast.vote_id)
            .await;

        assert!(matches!(result, Err(VoteError::NotVoteOwner)));
        assert!(repo.find_by_id(cast.vote_id).await.unwrap().is_some());
        assert_eq!(count(&repo, &votable).await, 1);
    }

    #[tokio::test]
    async fn test_retract_missing_vote_is_always_not_found() {
        let repo = setup();
        let user = repo.register_user().unwrap();
        let use_case = RetractVoteUseCase::new(repo.clone());

        for _ in 0..3 {
            let result = use_case.execute(&user, VoteId::new(1)).await;
            assert!(matches!(result, Err(VoteError::VoteNotFound)));
        }
    }

    #[tokio::test]
    async fn test_vote_again_after_retract() {
        let repo = setup();
        let user = repo.register_user().unwrap();
        let votable = locate(&repo, repo.add_comment().unwrap()).await;
        let cast = CastVoteUseCase::new(repo.clone());

        let first = cast.execute(&user, &votable).await.unwrap();
        RetractVoteUseCase::new(repo.clone())
            .execute(&user, first.vote_id)
            .await
            .unwrap();
        let second = cast.execute(&user, &votable).await.unwrap();

        assert_ne!(first.vote_id, second.vote_id);
        assert_eq!(count(&repo, &votable).await, 1);
    }

    #[tokio::test]
    async fn test_count_after_creates_and_deletes() {
        let repo = setup();
        let votable = locate(&repo, repo.add_article().unwrap()).await;
        let cast = CastVoteUseCase::new(repo.clone());
        let retract = RetractVoteUseCase::new(repo.clone());

        let mut votes = Vec::new();
        for _ in 0..5 {
            let user = repo.register_user().unwrap();
            let output = cast.execute(&user, &votable).await.unwrap();
            votes.push((user, output.vote_id));
        }
        for (user, vote_id) in votes.iter().take(2) {
            retract.execute(user, *vote_id).await.unwrap();
        }

        assert_eq!(count(&repo, &votable).await, 3);
    }
}

#[cfg(test)]
mod concurrency_tests {
    use crate::application::*;
    use crate::domain::entities::Votable;
    use crate::error::VoteError;
    use crate::infra::memory::MemoryVoteRepository;
    use std::sync::Arc;

    const CONTENDERS: usize = 32;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_casts_for_same_pair_yield_one_vote() {
        let repo = Arc::new(MemoryVoteRepository::new());
        let user = repo.register_user().unwrap();
        let votable: Votable = LocateTargetUseCase::new(repo.clone())
            .execute(repo.add_article().unwrap())
            .await
            .unwrap();

        let barrier = Arc::new(tokio::sync::Barrier::new(CONTENDERS));
        let mut handles = Vec::with_capacity(CONTENDERS);
        for _ in 0..CONTENDERS {
            let repo = repo.clone();
            let barrier = barrier.clone();
            handles.push(tokio::spawn(async move {
                barrier.wait().await;
                CastVoteUseCase::new(repo).execute(&user, &votable).await
            }));
        }

        let mut created = 0;
        let mut conflicts = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => created += 1,
                Err(VoteError::AlreadyVoted) => conflicts += 1,
                Err(other) => panic!("unexpected error: {other}"),
            }
        }

        assert_eq!(created, 1);
        assert_eq!(conflicts, CONTENDERS - 1);

        let count = CountVotesUseCase::new(repo.clone())
            .execute(&votable)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_casts_by_distinct_users_all_succeed() {
        let repo = Arc::new(MemoryVoteRepository::new());
        let votable: Votable = LocateTargetUseCase::new(repo.clone())
            .execute(repo.add_comment().unwrap())
            .await
            .unwrap();

        let mut handles = Vec::with_capacity(CONTENDERS);
        for _ in 0..CONTENDERS {
            let repo = repo.clone();
            let user = repo.register_user().unwrap();
            handles.push(tokio::spawn(async move {
                CastVoteUseCase::new(repo).execute(&user, &votable).await
            }));
        }

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let count = CountVotesUseCase::new(repo.clone())
            .execute(&votable)
            .await
            .unwrap();
        assert_eq!(count, CONTENDERS as i64);
    }
}

#[cfg(test)]
mod http_tests {
    use crate::application::config::VoteConfig;
    use crate::domain::entities::User;
    use crate::domain::repository::VoteRepository;
    use crate::domain::value_objects::TargetRef;
    use crate::infra::memory::MemoryVoteRepository;
    use crate::presentation::router::vote_router_generic;
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use kernel::id::VoteId;
    use tower::ServiceExt;

    struct TestApp {
        repo: MemoryVoteRepository,
        router: Router,
        user: User,
        token: String,
    }

    impl TestApp {
        fn new() -> Self {
            let repo = MemoryVoteRepository::new();
            let user = repo.register_user().unwrap();
            let token = repo.issue_token(&user).unwrap();
            let router = vote_router_generic(repo.clone(), VoteConfig::default());
            Self {
                repo,
                router,
                user,
                token,
            }
        }

        async fn send(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
            let response = self.router.clone().oneshot(request).await.unwrap();
            let status = response.status();
            let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            (status, body.to_vec())
        }

        async fn post_vote(&self, path: &str) -> (StatusCode, Vec<u8>) {
            self.send(authed(Request::post(path), &self.token)).await
        }

        async fn delete_vote(&self, vote_id: i64, token: &str) -> (StatusCode, Vec<u8>) {
            let path = format!("/votes/{vote_id}");
            self.send(authed(Request::delete(path.as_str()), token)).await
        }

        async fn count(&self, target: TargetRef) -> i64 {
            self.repo.count_for_target(&target).await.unwrap()
        }
    }

    fn authed(builder: axum::http::request::Builder, token: &str) -> Request<Body> {
        builder
            .header(header::CONTENT_TYPE, "application/json")
            .header("x-user-token", token)
            .body(Body::empty())
            .unwrap()
    }

    fn json(body: &[u8]) -> serde_json::Value {
        serde_json::from_slice(body).unwrap()
    }

    fn path_for(target: TargetRef) -> String {
        format!("/{}s/{}/votes", target.kind, target.id)
    }

    // ------------------------------------------------------------------------
    // Header checks
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_missing_content_type_is_rejected_first() {
        let app = TestApp::new();
        // Neither the article nor the token exists: content type still wins.
        let request = Request::post("/articles/1/votes")
            .body(Body::empty())
            .unwrap();

        let (status, body) = app.send(request).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(
            json(&body),
            serde_json::json!({ "errors": ["Content-Type must be application/json"] })
        );
    }

    #[tokio::test]
    async fn test_missing_token_is_rejected_before_target_lookup() {
        let app = TestApp::new();
        let request = Request::post("/articles/1/votes")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::empty())
            .unwrap();

        let (status, body) = app.send(request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            json(&body),
            serde_json::json!({ "errors": ["A valid user token is required"] })
        );
    }

    #[tokio::test]
    async fn test_unknown_token_is_rejected() {
        let app = TestApp::new();
        let article = app.repo.add_article().unwrap();

        let (status, _) = app
            .send(authed(Request::post(path_for(article).as_str()), "bogus"))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(app.count(article).await, 0);
    }

    #[tokio::test]
    async fn test_padded_token_is_rejected() {
        let app = TestApp::new();
        let article = app.repo.add_article().unwrap();
        let padded = format!(" {} ", app.token);

        let (status, _) = app
            .send(authed(Request::post(path_for(article).as_str()), &padded))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(app.count(article).await, 0);
    }

    #[tokio::test]
    async fn test_delete_requires_headers() {
        let app = TestApp::new();

        let request = Request::delete("/votes/1").body(Body::empty()).unwrap();
        let (status, _) = app.send(request).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);

        let request = Request::delete("/votes/1")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::empty())
            .unwrap();
        let (status, _) = app.send(request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    // ------------------------------------------------------------------------
    // Create
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_vote_for_missing_target_returns_empty_not_found() {
        let app = TestApp::new();

        for path in ["/articles/1/votes", "/comments/1/votes", "/articles/abc/votes"] {
            let (status, body) = app.post_vote(path).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
            assert!(body.is_empty(), "{path}");
        }
    }

    #[tokio::test]
    async fn test_create_vote_for_article_and_comment() {
        let app = TestApp::new();

        for target in [app.repo.add_article().unwrap(), app.repo.add_comment().unwrap()] {
            assert_eq!(app.count(target).await, 0);

            let (status, body) = app.post_vote(&path_for(target)).await;
            assert_eq!(status, StatusCode::CREATED);

            let id = json(&body)["id"].as_i64().unwrap();
            let vote = app.repo.find_by_id(VoteId::new(id)).await.unwrap().unwrap();
            assert_eq!(vote.user_id, app.user.id);
            assert_eq!(vote.target, target);
            assert_eq!(app.count(target).await, 1);
        }
    }

    #[tokio::test]
    async fn test_duplicate_vote_returns_bad_request() {
        let app = TestApp::new();

        for target in [app.repo.add_article().unwrap(), app.repo.add_comment().unwrap()] {
            let (status, _) = app.post_vote(&path_for(target)).await;
            assert_eq!(status, StatusCode::CREATED);

            let (status, body) = app.post_vote(&path_for(target)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(
                json(&body),
                serde_json::json!({ "errors": ["You've already voted for this item"] })
            );
            assert_eq!(app.count(target).await, 1);
        }
    }

    // ------------------------------------------------------------------------
    // Delete
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_delete_missing_vote_returns_empty_not_found() {
        let app = TestApp::new();

        for _ in 0..2 {
            let (status, body) = app.delete_vote(1, &app.token).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert!(body.is_empty());
        }
    }

    #[tokio::test]
    async fn test_delete_others_vote_is_forbidden() {
        let app = TestApp::new();
        let other = app.repo.register_user().unwrap();
        let other_token = app.repo.issue_token(&other).unwrap();
        let article = app.repo.add_article().unwrap();

        let (_, body) = app
            .send(authed(Request::post(path_for(article).as_str()), &other_token))
            .await;
        let vote_id = json(&body)["id"].as_i64().unwrap();

        let (status, body) = app.delete_vote(vote_id, &app.token).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(
            json(&body),
            serde_json::json!({ "errors": ["You may not delete others' votes"] })
        );
        assert!(
            app.repo
                .find_by_id(VoteId::new(vote_id))
                .await
                .unwrap()
                .is_some()
        );
    }

    #[tokio::test]
    async fn test_delete_own_vote() {
        let app = TestApp::new();
        let comment = app.repo.add_comment().unwrap();

        let (_, body) = app.post_vote(&path_for(comment)).await;
        let vote_id = json(&body)["id"].as_i64().unwrap();

        let (status, body) = app.delete_vote(vote_id, &app.token).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
        assert!(
            app.repo
                .find_by_id(VoteId::new(vote_id))
                .await
                .unwrap()
                .is_none()
        );
        assert_eq!(app.count(comment).await, 0);
    }

    // ------------------------------------------------------------------------
    // Count
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_count_route() {
        let app = TestApp::new();
        let article = app.repo.add_article().unwrap();
        app.post_vote(&path_for(article)).await;

        let request = Request::get(path_for(article).as_str())
            .body(Body::empty())
            .unwrap();
        let (status, body) = app.send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json(&body), serde_json::json!({ "count": 1 }));

        let request = Request::get("/comments/99/votes").body(Body::empty()).unwrap();
        let (status, body) = app.send(request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.is_empty());
    }
}
