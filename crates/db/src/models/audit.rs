//! Audit log models. Audit rows are immutable once written.

use maintrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single audit log entry.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AuditLog {
    pub id: DbId,
    pub timestamp: Timestamp,
    pub user_id: Option<DbId>,
    pub instance_id: Option<DbId>,
    pub action_type: String,
    pub entity_type: Option<String>,
    pub entity_id: Option<DbId>,
    pub details_json: Option<serde_json::Value>,
    pub integrity_hash: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for appending an audit log entry. The integrity hash is computed by
/// the repository.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAuditLog {
    pub user_id: Option<DbId>,
    pub instance_id: Option<DbId>,
    pub action_type: String,
    pub entity_type: Option<String>,
    pub entity_id: Option<DbId>,
    pub details_json: Option<serde_json::Value>,
}
