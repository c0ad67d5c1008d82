//! Session key fingerprinting.
//!
//! Startup logs a truncated SHA-256 digest of the signing key so operators
//! can tell which key is live without seeing the key itself.

use actix_web::cookie::Key;
use sha2::{Digest, Sha256};

/// Digest bytes kept before hex encoding.
const FINGERPRINT_BYTES: usize = 8;

/// First eight bytes of the SHA-256 digest of the key's signing half, as
/// lowercase hex.
///
/// # Examples
///
/// ```rust
/// use actix_web::cookie::Key;
/// use wanderlist::inbound::http::session_config::fingerprint::key_fingerprint;
///
/// let fp = key_fingerprint(&Key::generate());
/// assert_eq!(fp.len(), 16);
/// assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
#[must_use]
pub fn key_fingerprint(key: &Key) -> String {
    let digest = Sha256::digest(key.signing());
    hex::encode(&digest[..FINGERPRINT_BYTES])
}
