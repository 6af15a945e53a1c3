//! Application Configuration
//!
//! Configuration for the vote application layer.

/// Vote application configuration
#[derive(Debug, Clone)]
pub struct VoteConfig {
    /// Header carrying the user's credential token
    pub token_header: String,
    /// Media type every write request must declare
    pub accepted_content_type: String,
}

impl Default for VoteConfig {
    fn default() -> Self {
        Self {
            token_header: platform::client::USER_TOKEN_HEADER.to_string(),
            accepted_content_type: "application/json".to_string(),
        }
    }
}

impl VoteConfig {
    /// Use a different token header (header names are case-insensitive)
    pub fn with_token_header(self, token_header: impl Into<String>) -> Self {
        Self {
            token_header: token_header.into().to_ascii_lowercase(),
            ..self
        }
    }
}
