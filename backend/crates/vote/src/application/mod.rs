//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! Contains use case implementations.

pub mod cast_vote;
pub mod config;
pub mod count_votes;
pub mod locate_target;
pub mod resolve_credential;
pub mod retract_vote;

// Re-exports
pub use cast_vote::{CastVoteOutput, CastVoteUseCase};
pub use config::VoteConfig;
pub use count_votes::CountVotesUseCase;
pub use locate_target::LocateTargetUseCase;
pub use resolve_credential::ResolveCredentialUseCase;
pub use retract_vote::RetractVoteUseCase;
