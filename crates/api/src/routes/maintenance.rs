//! Route definitions for maintenance-job assets.
//!
//! Mounted at `/maintenance` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::maintenance;
use crate::state::AppState;

/// ```text
/// POST /job/updateAssetQuantity   -> update_asset_quantity
/// GET  /jobs/{id}/assets          -> list_job_assets
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/job/updateAssetQuantity",
            post(maintenance::update_asset_quantity),
        )
        .route("/jobs/{id}/assets", get(maintenance::list_job_assets))
}
