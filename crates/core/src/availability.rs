//! Availability arithmetic for bulk assets.

use serde::Serialize;

use crate::types::DbId;

/// How much of an asset is free once assignments and maintenance holds are
/// subtracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetAvailability {
    pub asset_id: DbId,
    pub is_quantity_based: bool,
    pub quantity: i64,
    pub assigned: i64,
    pub in_maintenance: i64,
    pub available: i64,
}

impl AssetAvailability {
    /// Build the availability summary. `available` never goes below zero,
    /// even when stock is over-committed.
    pub fn compute(
        asset_id: DbId,
        is_quantity_based: bool,
        quantity: i64,
        assigned: i64,
        in_maintenance: i64,
    ) -> Self {
        let available = quantity
            .saturating_sub(assigned)
            .saturating_sub(in_maintenance)
            .max(0);
        Self {
            asset_id,
            is_quantity_based,
            quantity,
            assigned,
            in_maintenance,
            available,
        }
    }
}
