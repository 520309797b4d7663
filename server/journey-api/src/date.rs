//! Timestamp formatting.

use chrono::{DateTime, SecondsFormat, Utc};

/// ISO-8601 UTC with millisecond precision, e.g. `2025-01-15T10:30:00.000Z`.
pub fn iso8601(ts: DateTime<Utc>) -> String {
  ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn now_iso8601() -> String {
  iso8601(Utc::now())
}
