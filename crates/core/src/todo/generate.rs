//! Identifier and timestamp generation for fresh ToDo items.

use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

/// Generates a random identifier in canonical lowercase UUID v4 form.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Formats an instant as `YYYY-MM-DDTHH:mm:ss.sssZ`.
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Returns the current instant as an ISO-8601 UTC timestamp with milliseconds.
pub fn now_timestamp() -> String {
    format_timestamp(Utc::now())
}
