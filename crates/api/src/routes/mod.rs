pub mod assets;
pub mod health;
pub mod maintenance;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /maintenance/job/updateAssetQuantity        update quantity in maintenance (POST, form)
/// /maintenance/jobs/{id}/assets               list assets attached to a job (GET)
/// /assets/{id}/availability                   stock availability of an asset (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/maintenance", maintenance::router())
        .nest("/assets", assets::router())
}
