//! Repository for the `maintenance_job_assets` junction table.

use maintrack_core::types::{DbId, Quantity};
use sqlx::PgPool;

use crate::models::maintenance_job_asset::{
    CreateMaintenanceJobAsset, JobAssetScope, MaintenanceJobAsset, MaintenanceJobAssetDetail,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, maintenance_job_id, asset_id, quantity, quantity_in_maintenance, \
    deleted, created_at, updated_at";

/// Provides CRUD operations for assets attached to maintenance jobs.
pub struct MaintenanceJobAssetRepo;

impl MaintenanceJobAssetRepo {
    /// Attach an asset to a job.
    ///
    /// Fails with a unique violation on `uq_maintenance_job_assets_job_asset`
    /// if the asset is already attached to the job.
    pub async fn create(
        pool: &PgPool,
        input: &CreateMaintenanceJobAsset,
    ) -> Result<MaintenanceJobAsset, sqlx::Error> {
        let query = format!(
            "INSERT INTO maintenance_job_assets \
                (maintenance_job_id, asset_id, quantity, quantity_in_maintenance) \
             VALUES ($1, $2, COALESCE($3, 1), COALESCE($4, LEAST(COALESCE($3, 1), 1))) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MaintenanceJobAsset>(&query)
            .bind(input.maintenance_job_id)
            .bind(input.asset_id)
            .bind(input.quantity)
            .bind(input.quantity_in_maintenance)
            .fetch_one(pool)
            .await
    }

    /// Find a live junction row by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MaintenanceJobAsset>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM maintenance_job_assets WHERE id = $1 AND deleted = false"
        );
        sqlx::query_as::<_, MaintenanceJobAsset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Load the fields needed to authorise and bound-check a quantity update.
    ///
    /// The owning job's instance is resolved through a LEFT JOIN restricted to
    /// live jobs, so `instance_id` is `None` when the job is soft-deleted.
    pub async fn find_scope(pool: &PgPool, id: DbId) -> Result<Option<JobAssetScope>, sqlx::Error> {
        sqlx::query_as::<_, JobAssetScope>(
            "SELECT mja.id, mja.quantity, j.instance_id \
             FROM maintenance_job_assets mja \
             LEFT JOIN maintenance_jobs j \
                ON j.id = mja.maintenance_job_id AND j.deleted = false \
             WHERE mja.id = $1 AND mja.deleted = false",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// List live junction rows of a job, joined with their assets.
    pub async fn list_for_job(
        pool: &PgPool,
        maintenance_job_id: DbId,
    ) -> Result<Vec<MaintenanceJobAssetDetail>, sqlx::Error> {
        sqlx::query_as::<_, MaintenanceJobAssetDetail>(
            "SELECT \
                mja.id, mja.maintenance_job_id, mja.asset_id, \
                a.tag AS asset_tag, a.name AS asset_name, a.is_quantity_based, \
                mja.quantity, mja.quantity_in_maintenance \
             FROM maintenance_job_assets mja \
             JOIN assets a ON a.id = mja.asset_id AND a.deleted = false \
             WHERE mja.maintenance_job_id = $1 AND mja.deleted = false \
             ORDER BY mja.id ASC",
        )
        .bind(maintenance_job_id)
        .fetch_all(pool)
        .await
    }

    /// Set `quantity_in_maintenance` within an existing transaction.
    ///
    /// The bound is re-checked in the WHERE clause, so a row whose total shrank
    /// since it was read is left untouched. Returns `true` if a row changed.
    pub async fn set_quantity_in_maintenance(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        id: DbId,
        quantity_in_maintenance: Quantity,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE maintenance_job_assets \
             SET quantity_in_maintenance = $2, updated_at = NOW() \
             WHERE id = $1 AND deleted = false AND quantity >= $2",
        )
        .bind(id)
        .bind(quantity_in_maintenance)
        .execute(&mut **tx)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Soft-delete a junction row. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE maintenance_job_assets SET deleted = true, updated_at = NOW() \
             WHERE id = $1 AND deleted = false",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
