//! Handlers for asset stock queries.

use axum::extract::{Path, State};
use axum::Json;
use maintrack_core::availability::AssetAvailability;
use maintrack_core::error::CoreError;
use maintrack_core::types::DbId;
use maintrack_db::repositories::AssetRepo;

use crate::error::AppResult;
use crate::middleware::permission::{RequirePermission, ViewAssets};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /assets/{id}/availability
///
/// Requires instance permission `ASSETS:VIEW`.
pub async fn get_availability(
    State(state): State<AppState>,
    RequirePermission(user, _): RequirePermission<ViewAssets>,
    Path(asset_id): Path<DbId>,
) -> AppResult<Json<DataResponse<AssetAvailability>>> {
    let totals = AssetRepo::quantity_totals(&state.pool, asset_id, user.instance_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Asset",
            id: asset_id,
        })?;

    let availability = AssetAvailability::compute(
        totals.asset_id,
        totals.is_quantity_based,
        i64::from(totals.quantity),
        totals.assigned,
        totals.in_maintenance,
    );

    Ok(Json(DataResponse::ok(availability)))
}
