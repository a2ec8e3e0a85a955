/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Quantity columns are PostgreSQL INTEGER.
pub type Quantity = i32;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
