//! Checksum validation for migrations
//!
//! Computes SHA256 checksums of migration SQL to detect edits to a migration
//! after it has been applied.

use sha2::{Digest, Sha256};

/// Compute SHA256 checksum of a string
pub fn compute_checksum(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}
