//! Vote Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases (resolve credential, locate target, cast,
//!   retract, count)
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, middleware, router
//!
//! ## Invariants
//! - At most one vote per (user, target type, target id), enforced by the
//!   store, so concurrent duplicate casts resolve to exactly one success
//! - Only the user who cast a vote may delete it
//! - Content-Type and token checks precede any target or vote lookup

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::VoteConfig;
pub use error::{VoteError, VoteResult};
pub use infra::memory::MemoryVoteRepository;
pub use infra::postgres::PgVoteRepository;
pub use presentation::router::{vote_router, vote_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{app_error::AppError, kind::ErrorKind};

#[cfg(test)]
mod tests;
