use sha2::{Digest, Sha256};
use std::fmt;

/// SHA-256 digest of an admin token, stored as lowercase hex.
///
/// `Debug` is redacted so the digest never reaches logs through `{:?}`.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminTokenHash(String);

impl AdminTokenHash {
    /// Wrap a digest loaded from the store
    pub fn from_stored(digest: impl Into<String>) -> Self {
        Self(digest.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hash `token` and compare against this digest in constant time
    pub fn verify(&self, token: &str) -> bool {
        let submitted = hash_admin_token(token);
        constant_time_eq(self.0.as_bytes(), submitted.0.as_bytes())
    }
}

impl fmt::Debug for AdminTokenHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AdminTokenHash(..)")
    }
}

/// Canonical form of a submitted admin token: surrounding whitespace is
/// dropped and a blank token counts as no token. Every path that hashes or
/// verifies a token goes through this first, so the server and the CLI
/// derive the same digest.
pub fn normalize_admin_token(raw: &str) -> Option<&str> {
    let token = raw.trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Derive the stored digest for an already normalized admin token
pub fn hash_admin_token(token: &str) -> AdminTokenHash {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    AdminTokenHash(format!("{:x}", hasher.finalize()))
}

/// Generate a new random admin token (32 hex chars)
pub fn generate_admin_token() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

// Both sides are 64-char hex digests, so only the length of a corrupted
// stored value can short-circuit.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
