//! Domain Value Objects
//!
//! Immutable value types for the vote domain.

use std::fmt;
use std::str::FromStr;

/// Kind of entity a vote can be cast against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    Article,
    Comment,
}

impl TargetKind {
    /// Discriminator stored in the `votes.target_type` column
    pub const fn as_str(&self) -> &'static str {
        match self {
            TargetKind::Article => "article",
            TargetKind::Comment => "comment",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown target kind: {0}")]
pub struct UnknownTargetKind(pub String);

impl FromStr for TargetKind {
    type Err = UnknownTargetKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "article" => Ok(TargetKind::Article),
            "comment" => Ok(TargetKind::Comment),
            other => Err(UnknownTargetKind(other.to_string())),
        }
    }
}

/// Polymorphic reference to a vote target: (kind, id)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetRef {
    pub kind: TargetKind,
    pub id: i64,
}

impl TargetRef {
    pub const fn new(kind: TargetKind, id: i64) -> Self {
        Self { kind, id }
    }

    pub const fn article(id: i64) -> Self {
        Self::new(TargetKind::Article, id)
    }

    pub const fn comment(id: i64) -> Self {
        Self::new(TargetKind::Comment, id)
    }

    /// Build a reference from a raw path segment
    ///
    /// Returns `None` unless the segment is a positive integer; such a
    /// segment cannot name any stored entity.
    pub fn parse(kind: TargetKind, raw_id: &str) -> Option<Self> {
        match raw_id.parse::<i64>() {
            Ok(id) if id > 0 => Some(Self::new(kind, id)),
            _ => None,
        }
    }
}

impl fmt::Display for TargetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

/// Opaque credential token presented by a client
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialToken(String);

impl CredentialToken {
    /// Accept a raw header value exactly as sent
    ///
    /// Missing or empty values are rejected, as is any value containing
    /// whitespace. Padding is never stripped.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let token = raw?;
        if token.is_empty() || token.chars().any(char::is_whitespace) {
            None
        } else {
            Some(Self(token.to_string()))
        }
    }

    /// Digest used to look the token up in storage
    pub fn digest(&self) -> [u8; 32] {
        platform::crypto::token_digest(&self.0)
    }
}

// Never print the secret itself.
impl fmt::Debug for CredentialToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CredentialToken(..)")
    }
}
