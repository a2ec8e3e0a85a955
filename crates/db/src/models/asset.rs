//! Asset and project-assignment models.

use maintrack_core::types::{DbId, Quantity, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `assets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Asset {
    pub id: DbId,
    pub instance_id: DbId,
    pub tag: String,
    pub name: String,
    pub deleted: bool,
    /// Bulk assets are tracked by count rather than as individual units.
    pub is_quantity_based: bool,
    /// Total stock if bulk; 1 if serialised.
    pub quantity: Quantity,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering an asset.
///
/// `quantity` defaults to 1 and is forced to 1 for serialised assets.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAsset {
    pub instance_id: DbId,
    pub tag: String,
    pub name: String,
    #[serde(default)]
    pub is_quantity_based: bool,
    pub quantity: Option<Quantity>,
}

/// A row from the `asset_assignments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AssetAssignment {
    pub id: DbId,
    pub asset_id: DbId,
    pub project_name: String,
    pub linked: bool,
    pub quantity: Quantity,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateAssetAssignment {
    pub asset_id: DbId,
    pub project_name: String,
    pub quantity: Option<Quantity>,
}

/// Raw quantity totals for one asset, summed across its assignments and
/// maintenance holds.
#[derive(Debug, Clone, FromRow)]
pub struct AssetQuantityTotals {
    pub asset_id: DbId,
    pub is_quantity_based: bool,
    pub quantity: Quantity,
    pub assigned: i64,
    pub in_maintenance: i64,
}
