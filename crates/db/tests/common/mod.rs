//! Fixture builders shared by the repository integration tests.

#![allow(dead_code)]

use maintrack_db::models::asset::{Asset, CreateAsset};
use maintrack_db::models::instance::{CreateInstance, CreateUser, Instance, User};
use maintrack_db::models::maintenance_job::{CreateMaintenanceJob, MaintenanceJob};
use maintrack_db::models::maintenance_job_asset::{
    CreateMaintenanceJobAsset, MaintenanceJobAsset,
};
use maintrack_db::repositories::{
    AssetRepo, InstanceRepo, MaintenanceJobAssetRepo, MaintenanceJobRepo, UserRepo,
};
use sqlx::PgPool;

pub async fn instance(pool: &PgPool, name: &str) -> Instance {
    InstanceRepo::create(
        pool,
        &CreateInstance {
            name: name.to_string(),
        },
    )
    .await
    .unwrap()
}

pub async fn user(pool: &PgPool, username: &str) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
        },
    )
    .await
    .unwrap()
}

pub async fn bulk_asset(pool: &PgPool, instance_id: i64, tag: &str, quantity: i32) -> Asset {
    AssetRepo::create(
        pool,
        &CreateAsset {
            instance_id,
            tag: tag.to_string(),
            name: format!("{tag} cable"),
            is_quantity_based: true,
            quantity: Some(quantity),
        },
    )
    .await
    .unwrap()
}

pub async fn job(pool: &PgPool, instance_id: i64, name: &str) -> MaintenanceJob {
    MaintenanceJobRepo::create(
        pool,
        &CreateMaintenanceJob {
            instance_id,
            name: name.to_string(),
        },
    )
    .await
    .unwrap()
}

pub async fn job_asset(
    pool: &PgPool,
    job_id: i64,
    asset_id: i64,
    quantity: i32,
    quantity_in_maintenance: i32,
) -> MaintenanceJobAsset {
    MaintenanceJobAssetRepo::create(
        pool,
        &CreateMaintenanceJobAsset {
            maintenance_job_id: job_id,
            asset_id,
            quantity: Some(quantity),
            quantity_in_maintenance: Some(quantity_in_maintenance),
        },
    )
    .await
    .unwrap()
}
