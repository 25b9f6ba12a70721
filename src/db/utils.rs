//! Database utility functions.

use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

/// Generate a random UUID v4 for a new entity.
pub fn generate_entity_id() -> String {
    Uuid::new_v4().to_string()
}

/// Current time as ISO-8601 UTC with millisecond precision, e.g.
/// `2026-10-18T09:30:00.000Z`.
pub fn current_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
