use maintrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `maintenance_jobs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MaintenanceJob {
    pub id: DbId,
    pub instance_id: DbId,
    pub name: String,
    pub deleted: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateMaintenanceJob {
    pub instance_id: DbId,
    pub name: String,
}
