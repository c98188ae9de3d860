//! The ledger clock.
//!
//! All ledger timestamps are ISO-8601 strings carrying an explicit UTC-5
//! offset. They are part of the block hash pre-image, so the string rendering
//! must be stable: microsecond precision, offset always written out.

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};

/// Seconds west of UTC for the ledger's fixed offset.
const LEDGER_OFFSET_WEST_SECS: i32 = 5 * 3600;

/// The ledger's fixed UTC-5 offset.
pub fn ledger_offset() -> FixedOffset {
    FixedOffset::west_opt(LEDGER_OFFSET_WEST_SECS).expect("offset is within ±24h")
}

/// Current instant on the ledger clock.
pub fn ledger_now() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&ledger_offset())
}

/// Render an instant in the ledger's wire format.
pub fn format_timestamp(instant: &DateTime<FixedOffset>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Micros, false)
}
