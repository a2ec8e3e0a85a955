//! Audit logging constants and the integrity hash chain.
//!
//! Every audit entry stores a SHA-256 over the previous entry's hash and its
//! own canonical content, so tampering with an earlier row breaks every hash
//! after it.

use crate::hashing;
use crate::types::{DbId, Timestamp};

/// Known action types for audit log entries.
pub mod action_types {
    pub const UPDATE_QUANTITY: &str = "UPDATE-QUANTITY";
}

/// Known seed value for the first entry in the hash chain.
const CHAIN_SEED: &str = "AUDIT_LOG_CHAIN_SEED_V1";

/// Compute the SHA-256 integrity hash for an audit log entry.
///
/// `prev_hash` is the integrity_hash of the previous entry, or `None` for the
/// first entry in the chain.
pub fn compute_integrity_hash(prev_hash: Option<&str>, entry_data: &str) -> String {
    let prev = prev_hash.unwrap_or(CHAIN_SEED);
    let combined = format!("{prev}|{entry_data}");
    hashing::sha256_hex(combined.as_bytes())
}

/// Canonical pipe-separated representation of an entry's content.
///
/// Absent optional fields render as the empty string.
pub fn canonical_entry_data(
    timestamp: &Timestamp,
    user_id: Option<DbId>,
    action_type: &str,
    entity_type: Option<&str>,
    entity_id: Option<DbId>,
) -> String {
    format!(
        "{}|{}|{}|{}|{}",
        timestamp.to_rfc3339(),
        user_id.map_or(String::new(), |id| id.to_string()),
        action_type,
        entity_type.unwrap_or(""),
        entity_id.map_or(String::new(), |id| id.to_string()),
    )
}
