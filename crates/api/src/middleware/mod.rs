//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the caller from a JWT Bearer token.
//! - [`permission::RequirePermission`] -- Requires an instance permission and
//!   hides the refusal behind a generic not-found.

pub mod auth;
pub mod permission;
