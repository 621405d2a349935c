use chrono::{DateTime, SecondsFormat, Utc};

/// ISO-8601 UTC timestamp as stored in `created_at`
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}
