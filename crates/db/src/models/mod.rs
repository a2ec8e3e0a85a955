//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row and, where rows are inserted from code, a `Deserialize`
//! create DTO.

pub mod asset;
pub mod audit;
pub mod instance;
pub mod maintenance_job;
pub mod maintenance_job_asset;
