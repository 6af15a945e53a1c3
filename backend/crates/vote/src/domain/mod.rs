//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (User, Votable, Vote)
//! - Domain value objects (TargetKind, TargetRef, CredentialToken)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod value_objects;
