//! Resolve Credential Use Case
//!
//! Maps the token presented by a client to the user owning it.

use std::sync::Arc;

use crate::domain::entities::User;
use crate::domain::repository::CredentialRepository;
use crate::domain::value_objects::CredentialToken;
use crate::error::{VoteError, VoteResult};

/// Resolve Credential Use Case
pub struct ResolveCredentialUseCase<C>
where
    C: CredentialRepository,
{
    credential_repo: Arc<C>,
}

impl<C> ResolveCredentialUseCase<C>
where
    C: CredentialRepository,
{
    pub fn new(credential_repo: Arc<C>) -> Self {
        Self { credential_repo }
    }

    /// Resolve a raw header value into a user
    ///
    /// Absent, blank, and unknown or expired tokens all fail the same way.
    pub async fn execute(&self, raw_token: Option<&str>) -> VoteResult<User> {
        let token = CredentialToken::parse(raw_token).ok_or(VoteError::Unauthenticated)?;

        let user = self
            .credential_repo
            .find_user_by_token_digest(&token.digest())
            .await?
            .ok_or(VoteError::Unauthenticated)?;

        tracing::debug!(user_id = %user.id, "Credential resolved");

        Ok(user)
    }
}
