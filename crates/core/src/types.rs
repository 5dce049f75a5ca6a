/// Backend resource identifiers are 64-bit integers.
pub type DbId = i64;

/// Timestamps exchanged with the backend are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
