//! Shared-secret password hashing.

use sha2::{Digest, Sha256};

/// Returns the lowercase hex SHA-256 digest of `password`.
///
/// The digest is what goes into the config file and into the `auth` cookie.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Compares two digests without short-circuiting on the first mismatch.
pub fn digests_match(a: &str, b: &str) -> bool {
    a.len() == b.len()
        && a
            .bytes()
            .zip(b.bytes())
            .fold(0u8, |acc, (x, y)| acc | (x ^ y))
            == 0
}
