//! Handlers for assets attached to maintenance jobs.
//!
//! The quantity update holds back part of a bulk asset for maintenance. It
//! validates, bound-checks against the row's total, then writes the new value
//! and its audit entry in one transaction.

use axum::extract::rejection::FormRejection;
use axum::extract::{Path, State};
use axum::{Form, Json};
use maintrack_core::audit::action_types;
use maintrack_core::error::CoreError;
use maintrack_core::maintenance::{self, JobAssetError};
use maintrack_core::types::{DbId, Quantity};
use maintrack_db::models::audit::CreateAuditLog;
use maintrack_db::models::maintenance_job_asset::MaintenanceJobAssetDetail;
use maintrack_db::repositories::{AuditLogRepo, MaintenanceJobAssetRepo, MaintenanceJobRepo};
use maintrack_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::permission::{EditAssetQuantity, RequirePermission, ViewMaintenanceJobs};
use crate::response::{DataResponse, ResultResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request DTOs
// ---------------------------------------------------------------------------

/// Form body for the quantity update.
///
/// Fields stay as raw strings so absent and malformed values can be told
/// apart and reported with the right code.
#[derive(Debug, Default)]
pub struct UpdateAssetQuantityForm {
    pub maintenance_job_asset_id: Option<String>,
    pub quantity_in_maintenance: Option<String>,
}

impl UpdateAssetQuantityForm {
    /// Collect the known fields from decoded form pairs. When a field is
    /// repeated the last value wins; unknown fields are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        pairs
            .into_iter()
            .fold(Self::default(), |mut form, (key, value)| {
                match key.as_str() {
                    "maintenanceJobsAssets_id" => form.maintenance_job_asset_id = Some(value),
                    "quantityInMaintenance" => form.quantity_in_maintenance = Some(value),
                    _ => {}
                }
                form
            })
    }
}

// ---------------------------------------------------------------------------
// Update quantity in maintenance
// ---------------------------------------------------------------------------

/// POST /maintenance/job/updateAssetQuantity
///
/// Requires instance permission `MAINTENANCE_JOBS:EDIT:ASSET_QUANTITY`.
pub async fn update_asset_quantity(
    State(state): State<AppState>,
    RequirePermission(user, _): RequirePermission<EditAssetQuantity>,
    pairs: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> AppResult<Json<ResultResponse>> {
    let Form(pairs) = pairs.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected unreadable form body");
        AppError::NotFound
    })?;
    let form = UpdateAssetQuantityForm::from_pairs(pairs);
    let (Some(raw_id), Some(raw_quantity)) = (
        form.maintenance_job_asset_id.as_deref(),
        form.quantity_in_maintenance.as_deref(),
    ) else {
        return Err(AppError::NotFound);
    };

    let requested = maintenance::parse_quantity_in_maintenance(raw_quantity)?;
    let id: DbId = raw_id.trim().parse().map_err(|_| JobAssetError::NotFound)?;

    let scope = MaintenanceJobAssetRepo::find_scope(&state.pool, id)
        .await?
        .ok_or(JobAssetError::NotFound)?;
    maintenance::ensure_same_instance(scope.instance_id, user.instance_id)?;

    let quantity = maintenance::check_within_total(requested, scope.quantity)?;

    match persist_quantity_update(&state.pool, &user, id, quantity).await {
        Ok(true) => {}
        Ok(false) => {
            tracing::warn!(
                maintenance_job_asset_id = id,
                quantity,
                "Quantity update matched no row",
            );
            return Err(JobAssetError::UpdateFailed.into());
        }
        Err(err) => {
            tracing::error!(error = %err, maintenance_job_asset_id = id, "Quantity update failed");
            return Err(JobAssetError::UpdateFailed.into());
        }
    }

    tracing::info!(
        maintenance_job_asset_id = id,
        quantity_in_maintenance = quantity,
        user_id = user.user_id,
        instance_id = user.instance_id,
        "Quantity in maintenance updated",
    );

    Ok(Json(ResultResponse::ok()))
}

/// Write the new quantity and its audit entry atomically.
///
/// Returns `Ok(false)` without committing when the guarded UPDATE matches no
/// row, which leaves neither write behind.
async fn persist_quantity_update(
    pool: &DbPool,
    user: &AuthUser,
    id: DbId,
    quantity: Quantity,
) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    if !MaintenanceJobAssetRepo::set_quantity_in_maintenance(&mut tx, id, quantity).await? {
        return Ok(false);
    }

    AuditLogRepo::append(
        &mut tx,
        &CreateAuditLog {
            user_id: Some(user.user_id),
            instance_id: Some(user.instance_id),
            action_type: action_types::UPDATE_QUANTITY.to_string(),
            entity_type: Some(maintenance::ENTITY_TYPE.to_string()),
            entity_id: Some(id),
            details_json: Some(serde_json::json!({ "quantity_in_maintenance": quantity })),
        },
    )
    .await?;

    tx.commit().await?;
    Ok(true)
}

// ---------------------------------------------------------------------------
// List job assets
// ---------------------------------------------------------------------------

/// GET /maintenance/jobs/{id}/assets
///
/// Requires instance permission `MAINTENANCE_JOBS:VIEW`.
pub async fn list_job_assets(
    State(state): State<AppState>,
    RequirePermission(user, _): RequirePermission<ViewMaintenanceJobs>,
    Path(job_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<MaintenanceJobAssetDetail>>>> {
    MaintenanceJobRepo::find_in_instance(&state.pool, job_id, user.instance_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "MaintenanceJob",
            id: job_id,
        })?;

    let assets = MaintenanceJobAssetRepo::list_for_job(&state.pool, job_id).await?;
    Ok(Json(DataResponse::ok(assets)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn known_fields_are_collected() {
        let form = UpdateAssetQuantityForm::from_pairs(pairs(&[
            ("maintenanceJobsAssets_id", "4"),
            ("quantityInMaintenance", "2"),
            ("extra", "ignored"),
        ]));
        assert_eq!(form.maintenance_job_asset_id.as_deref(), Some("4"));
        assert_eq!(form.quantity_in_maintenance.as_deref(), Some("2"));
    }

    #[test]
    fn repeated_field_keeps_last_value() {
        let form = UpdateAssetQuantityForm::from_pairs(pairs(&[
            ("maintenanceJobsAssets_id", "4"),
            ("maintenanceJobsAssets_id", "9"),
        ]));
        assert_eq!(form.maintenance_job_asset_id.as_deref(), Some("9"));
        assert_eq!(form.quantity_in_maintenance, None);
    }
}
