//! Infrastructure Layer
//!
//! Database implementations.

pub mod memory;
pub mod postgres;

pub use memory::MemoryVoteRepository;
pub use postgres::PgVoteRepository;
