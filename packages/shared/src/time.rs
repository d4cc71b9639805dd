//! Time helpers (JST, milliseconds).

use chrono::{DateTime, FixedOffset, Utc};

/// JST is UTC+9
const JST_OFFSET_SECONDS: i32 = 9 * 3600;

/// Get current Unix timestamp in JST (milliseconds)
///
/// Unix time is offset-independent, so this is the same instant as UTC;
/// the JST offset only matters when formatting.
pub fn get_jst_timestamp() -> i64 {
    Utc::now().timestamp_millis()
}

/// Format a Unix timestamp (milliseconds) as an RFC 3339 string in JST.
///
/// Returns `None` if the timestamp is out of chrono's representable range.
pub fn timestamp_to_jst_rfc3339(timestamp_millis: i64) -> Option<String> {
    let jst_offset = FixedOffset::east_opt(JST_OFFSET_SECONDS)?;
    let utc: DateTime<Utc> = DateTime::from_timestamp_millis(timestamp_millis)?;
    Some(utc.with_timezone(&jst_offset).to_rfc3339())
}
