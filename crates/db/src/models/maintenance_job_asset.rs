//! Junction rows linking maintenance jobs to assets.
//!
//! Invariant: `0 <= quantity_in_maintenance <= quantity`. The table carries a
//! CHECK constraint for it as well.

use maintrack_core::types::{DbId, Quantity, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `maintenance_job_assets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MaintenanceJobAsset {
    pub id: DbId,
    pub maintenance_job_id: DbId,
    pub asset_id: DbId,
    pub quantity: Quantity,
    pub quantity_in_maintenance: Quantity,
    pub deleted: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for attaching an asset to a maintenance job.
///
/// Both quantities default to 1; `quantity_in_maintenance` is capped at
/// `quantity` when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMaintenanceJobAsset {
    pub maintenance_job_id: DbId,
    pub asset_id: DbId,
    pub quantity: Option<Quantity>,
    pub quantity_in_maintenance: Option<Quantity>,
}

/// The slice of a junction row needed to authorise and bound-check an update.
///
/// `instance_id` comes from a LEFT JOIN on a live job and is `None` when the
/// owning job is soft-deleted.
#[derive(Debug, Clone, FromRow)]
pub struct JobAssetScope {
    pub id: DbId,
    pub quantity: Quantity,
    pub instance_id: Option<DbId>,
}

/// Junction row joined with its asset, for job listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MaintenanceJobAssetDetail {
    pub id: DbId,
    pub maintenance_job_id: DbId,
    pub asset_id: DbId,
    pub asset_tag: String,
    pub asset_name: String,
    pub is_quantity_based: bool,
    pub quantity: Quantity,
    pub quantity_in_maintenance: Quantity,
}
