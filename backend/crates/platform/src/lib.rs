//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, random tokens)
//! - Request header helpers (credential token, content type)

pub mod client;
pub mod crypto;
