use axum::routing::get;
use axum::Router;

use crate::handlers::assets;
use crate::state::AppState;

/// Asset routes mounted at `/assets`.
///
/// ```text
/// GET /{id}/availability -> get_availability
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}/availability", get(assets::get_availability))
}
