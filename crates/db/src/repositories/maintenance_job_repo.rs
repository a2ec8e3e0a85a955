//! Repository for the `maintenance_jobs` table.

use maintrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::maintenance_job::{CreateMaintenanceJob, MaintenanceJob};

const COLUMNS: &str = "id, instance_id, name, deleted, created_at, updated_at";

pub struct MaintenanceJobRepo;

impl MaintenanceJobRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateMaintenanceJob,
    ) -> Result<MaintenanceJob, sqlx::Error> {
        let query = format!(
            "INSERT INTO maintenance_jobs (instance_id, name) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MaintenanceJob>(&query)
            .bind(input.instance_id)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a live job by ID within an instance.
    pub async fn find_in_instance(
        pool: &PgPool,
        id: DbId,
        instance_id: DbId,
    ) -> Result<Option<MaintenanceJob>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM maintenance_jobs \
             WHERE id = $1 AND instance_id = $2 AND deleted = false"
        );
        sqlx::query_as::<_, MaintenanceJob>(&query)
            .bind(id)
            .bind(instance_id)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a job. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE maintenance_jobs SET deleted = true, updated_at = NOW() \
             WHERE id = $1 AND deleted = false",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete a job. Junction rows cascade.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM maintenance_jobs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
