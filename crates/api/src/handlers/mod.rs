pub mod assets;
pub mod maintenance;
