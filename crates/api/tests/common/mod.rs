//! Shared helpers for HTTP-level integration tests.
//!
//! Requests are sent straight to the router with `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use maintrack_api::auth::jwt::{generate_access_token, JwtConfig};
use maintrack_api::config::ServerConfig;
use maintrack_api::router::build_app_router;
use maintrack_api::state::AppState;
use maintrack_db::models::asset::{Asset, CreateAsset};
use maintrack_db::models::instance::{CreateInstance, CreateUser, Instance, User};
use maintrack_db::models::maintenance_job::{CreateMaintenanceJob, MaintenanceJob};
use maintrack_db::models::maintenance_job_asset::{
    CreateMaintenanceJobAsset, MaintenanceJobAsset,
};
use maintrack_db::repositories::{
    AssetRepo, InstanceRepo, MaintenanceJobAssetRepo, MaintenanceJobRepo, UserRepo,
};

pub const TEST_JWT_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".parse().unwrap()],
        request_timeout_secs: 30,
        database_url: String::new(),
        db_max_connections: 5,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router over the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Issue an access token for `user_id` in `instance_id` holding `permissions`.
pub fn token_for(user_id: i64, instance_id: i64, permissions: &[&str]) -> String {
    generate_access_token(user_id, instance_id, permissions, &test_config().jwt).unwrap()
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a url-encoded form body, optionally with a bearer token.
pub async fn post_form(
    app: Router,
    uri: &str,
    body: &str,
    token: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    app.oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// One tenant with a user, a bulk asset, a job, and the asset attached to it.
pub struct Fixture {
    pub instance: Instance,
    pub user: User,
    pub asset: Asset,
    pub job: MaintenanceJob,
    pub job_asset: MaintenanceJobAsset,
}

pub async fn seed(pool: &PgPool, label: &str, stock: i32, in_job: i32, held: i32) -> Fixture {
    let instance = InstanceRepo::create(
        pool,
        &CreateInstance {
            name: format!("{label} instance"),
        },
    )
    .await
    .unwrap();
    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: format!("{label}-tech"),
        },
    )
    .await
    .unwrap();
    let asset = AssetRepo::create(
        pool,
        &CreateAsset {
            instance_id: instance.id,
            tag: format!("{label}-CBL"),
            name: "16A extension cable".to_string(),
            is_quantity_based: true,
            quantity: Some(stock),
        },
    )
    .await
    .unwrap();
    let job = MaintenanceJobRepo::create(
        pool,
        &CreateMaintenanceJob {
            instance_id: instance.id,
            name: "PAT testing".to_string(),
        },
    )
    .await
    .unwrap();
    let job_asset = MaintenanceJobAssetRepo::create(
        pool,
        &CreateMaintenanceJobAsset {
            maintenance_job_id: job.id,
            asset_id: asset.id,
            quantity: Some(in_job),
            quantity_in_maintenance: Some(held),
        },
    )
    .await
    .unwrap();

    Fixture {
        instance,
        user,
        asset,
        job,
        job_asset,
    }
}
