//! Repository for the `instances` and `users` tables.

use sqlx::PgPool;

use crate::models::instance::{CreateInstance, CreateUser, Instance, User};

const INSTANCE_COLUMNS: &str = "id, name, created_at, updated_at";
const USER_COLUMNS: &str = "id, username, created_at, updated_at";

pub struct InstanceRepo;

impl InstanceRepo {
    pub async fn create(pool: &PgPool, input: &CreateInstance) -> Result<Instance, sqlx::Error> {
        let query = format!("INSERT INTO instances (name) VALUES ($1) RETURNING {INSTANCE_COLUMNS}");
        sqlx::query_as::<_, Instance>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }
}

pub struct UserRepo;

impl UserRepo {
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!("INSERT INTO users (username) VALUES ($1) RETURNING {USER_COLUMNS}");
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .fetch_one(pool)
            .await
    }
}
