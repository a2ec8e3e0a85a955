//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that accept
//! `&PgPool` as the first argument, or a transaction when the write must be
//! committed together with other writes.

pub mod asset_repo;
pub mod audit_repo;
pub mod instance_repo;
pub mod maintenance_job_asset_repo;
pub mod maintenance_job_repo;

pub use asset_repo::{AssetAssignmentRepo, AssetRepo};
pub use audit_repo::AuditLogRepo;
pub use instance_repo::{InstanceRepo, UserRepo};
pub use maintenance_job_asset_repo::MaintenanceJobAssetRepo;
pub use maintenance_job_repo::MaintenanceJobRepo;
