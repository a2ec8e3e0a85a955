//! Tenants and the users acting within them.

use maintrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `instances` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Instance {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateInstance {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub username: String,
}
