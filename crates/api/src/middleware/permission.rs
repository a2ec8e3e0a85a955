//! Instance-permission extractors.
//!
//! Each permission is a marker type implementing [`InstancePermission`], so a
//! handler states its requirement in its signature:
//!
//! ```ignore
//! async fn handler(RequirePermission(user, _): RequirePermission<ViewAssets>) { .. }
//! ```
//!
//! Any refusal (no token, bad token, permission missing) is reported as a
//! generic 404 so callers cannot probe which endpoints exist.

use std::marker::PhantomData;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use maintrack_core::permissions;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// A named permission granted per instance.
pub trait InstancePermission {
    const NAME: &'static str;
}

pub struct EditAssetQuantity;

impl InstancePermission for EditAssetQuantity {
    const NAME: &'static str = permissions::MAINTENANCE_JOBS_EDIT_ASSET_QUANTITY;
}

pub struct ViewMaintenanceJobs;

impl InstancePermission for ViewMaintenanceJobs {
    const NAME: &'static str = permissions::MAINTENANCE_JOBS_VIEW;
}

pub struct ViewAssets;

impl InstancePermission for ViewAssets {
    const NAME: &'static str = permissions::ASSETS_VIEW;
}

/// Requires the caller to hold `P` in its instance.
pub struct RequirePermission<P>(pub AuthUser, pub PhantomData<P>);

impl<P> FromRequestParts<AppState> for RequirePermission<P>
where
    P: InstancePermission + Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state)
            .await
            .map_err(|err| {
                tracing::debug!(error = %err, permission = P::NAME, "Rejected unauthenticated request");
                AppError::NotFound
            })?;

        if !user.has_permission(P::NAME) {
            tracing::debug!(
                user_id = user.user_id,
                instance_id = user.instance_id,
                permission = P::NAME,
                "Rejected request lacking instance permission",
            );
            return Err(AppError::NotFound);
        }

        Ok(RequirePermission(user, PhantomData))
    }
}
