//! Domain rules shared by the database and API layers.
//!
//! Nothing in this crate performs IO, so every rule here can be unit tested
//! without a database.

pub mod audit;
pub mod availability;
pub mod error;
pub mod hashing;
pub mod maintenance;
pub mod permissions;
pub mod types;
