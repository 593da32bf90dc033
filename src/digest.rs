//! Content digest engine
//!
//! A fingerprint only needs to be stable and collision-resistant enough that
//! changed content never reuses a cached filename; SHA-256 gives that plus
//! stable cross-implementation expected values for tests.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 digest of a byte sequence as lowercase hex.
///
/// Pure and deterministic: identical bytes always produce identical output.
pub fn digest(content: &[u8]) -> String {
    let hash = Sha256::digest(content);
    format!("{hash:x}")
}
