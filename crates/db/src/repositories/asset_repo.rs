//! Repository for the `assets` and `asset_assignments` tables.

use maintrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::asset::{
    Asset, AssetAssignment, AssetQuantityTotals, CreateAsset, CreateAssetAssignment,
};

/// Column list for `assets` queries.
const ASSET_COLUMNS: &str = "\
    id, instance_id, tag, name, deleted, \
    is_quantity_based, quantity, created_at, updated_at";

/// Column list for `asset_assignments` queries.
const ASSIGNMENT_COLUMNS: &str = "\
    id, asset_id, project_name, linked, quantity, created_at, updated_at";

/// Provides CRUD operations for assets.
pub struct AssetRepo;

impl AssetRepo {
    /// Register a new asset. Serialised assets always carry a quantity of 1.
    pub async fn create(pool: &PgPool, input: &CreateAsset) -> Result<Asset, sqlx::Error> {
        let quantity = if input.is_quantity_based {
            input.quantity.unwrap_or(1)
        } else {
            1
        };
        let query = format!(
            "INSERT INTO assets (instance_id, tag, name, is_quantity_based, quantity) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {ASSET_COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(input.instance_id)
            .bind(&input.tag)
            .bind(&input.name)
            .bind(input.is_quantity_based)
            .bind(quantity)
            .fetch_one(pool)
            .await
    }

    /// Sum linked assignment quantities and live maintenance holds for a
    /// live asset within an instance.
    pub async fn quantity_totals(
        pool: &PgPool,
        id: DbId,
        instance_id: DbId,
    ) -> Result<Option<AssetQuantityTotals>, sqlx::Error> {
        sqlx::query_as::<_, AssetQuantityTotals>(
            "SELECT \
                a.id AS asset_id, \
                a.is_quantity_based, \
                a.quantity, \
                COALESCE((SELECT SUM(aa.quantity) FROM asset_assignments aa \
                          WHERE aa.asset_id = a.id AND aa.linked), 0)::BIGINT AS assigned, \
                COALESCE((SELECT SUM(mja.quantity_in_maintenance) \
                          FROM maintenance_job_assets mja \
                          JOIN maintenance_jobs j ON j.id = mja.maintenance_job_id \
                          WHERE mja.asset_id = a.id AND NOT mja.deleted AND NOT j.deleted), 0)::BIGINT \
                    AS in_maintenance \
             FROM assets a \
             WHERE a.id = $1 AND a.instance_id = $2 AND a.deleted = false",
        )
        .bind(id)
        .bind(instance_id)
        .fetch_optional(pool)
        .await
    }

    /// Soft-delete an asset. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE assets SET deleted = true, updated_at = NOW() \
             WHERE id = $1 AND deleted = false",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete an asset. Junction rows cascade.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Provides insert operations for project assignments of assets.
pub struct AssetAssignmentRepo;

impl AssetAssignmentRepo {
    /// Assign a quantity of an asset to a project. Defaults to 1.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAssetAssignment,
    ) -> Result<AssetAssignment, sqlx::Error> {
        let query = format!(
            "INSERT INTO asset_assignments (asset_id, project_name, quantity) \
             VALUES ($1, $2, COALESCE($3, 1)) \
             RETURNING {ASSIGNMENT_COLUMNS}"
        );
        sqlx::query_as::<_, AssetAssignment>(&query)
            .bind(input.asset_id)
            .bind(&input.project_name)
            .bind(input.quantity)
            .fetch_one(pool)
            .await
    }

    /// Unlink an assignment so it no longer counts against availability.
    pub async fn unlink(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE asset_assignments SET linked = false, updated_at = NOW() \
             WHERE id = $1 AND linked",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
