//! Cryptographic Utilities

use base64::{Engine, engine::general_purpose};
use rand::RngCore;
use sha2::{Digest, Sha256};

/// Generate cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    rand::rng().fill_bytes(&mut bytes);
    bytes
}

/// Compute SHA-256 hash
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Generate an opaque, header-safe token from `len` random bytes
///
/// The result is URL-safe base64 without padding, so it can be sent as-is
/// in an HTTP header.
pub fn random_token(len: usize) -> String {
    general_purpose::URL_SAFE_NO_PAD.encode(random_bytes(len))
}

/// Digest under which a credential token is stored
///
/// Raw token values are never persisted; lookups go through this digest.
pub fn token_digest(token: &str) -> [u8; 32] {
    sha256(token.as_bytes())
}
