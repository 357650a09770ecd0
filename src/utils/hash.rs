//! Identity anonymization
//!
//! Derives a stable, one-way identifier from a client address and a subject
//! id. The hash is the deduplication key and the privacy boundary: read-back
//! consumers only ever see the digest, never the address.

use base64::Engine;
use sha2::{Digest, Sha256};

/// SHA-256 over the raw concatenation `client_address + subject_id`,
/// encoded as standard base64 (44 characters).
///
/// Deterministic for identical inputs. Clients without any resolvable
/// address all share the `"unknown"` sentinel and therefore collapse into a
/// single identity per subject.
pub fn anonymize(client_address: &str, subject_id: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(client_address.as_bytes());
    hasher.update(subject_id.as_bytes());
    base64::engine::general_purpose::STANDARD.encode(hasher.finalize())
}
