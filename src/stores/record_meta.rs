use chrono::Utc;
use uuid::Uuid;

/// Time-ordered identifier for a new row
///
/// UUIDv7 sorts by creation time, so `(created_at, id)` descending is a
/// stable newest-first order even within one millisecond.
pub fn new_record_id() -> String {
    Uuid::now_v7().to_string()
}

/// Creation timestamp in milliseconds since the Unix epoch
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
