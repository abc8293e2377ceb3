//! Total timestamp normalization.

use chrono::{DateTime, TimeZone, Utc};

/// Normalize a raw epoch-milliseconds timestamp into a valid instant.
///
/// Total function: `None`, `0`, and values outside the representable range
/// all map to the current instant. Store records carry timestamps of
/// uncertain quality and a bad one must never fail an extraction.
pub fn normalize_timestamp(raw: Option<i64>) -> DateTime<Utc> {
    match raw {
        Some(millis) if millis != 0 => Utc
            .timestamp_millis_opt(millis)
            .single()
            .unwrap_or_else(Utc::now),
        _ => Utc::now(),
    }
}
