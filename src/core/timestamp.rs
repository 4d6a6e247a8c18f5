//! Timestamp formatting utilities
//!
//! Field suppliers stamp records with a preformatted string so every writer
//! sees the same text.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp layouts used by the profiles
///
/// # Examples
///
/// ```
/// use rust_tracelog::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let at = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
/// assert_eq!(TimestampFormat::UtcSeconds.format(&at), "2023-01-01 00:00:00 UTC");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// `2023-01-01 13:04:05 UTC`, used by the plain profile
    #[default]
    UtcSeconds,

    /// `2023-01-01 13:04:05.123 UTC`, used by the storage profile
    UtcMillis,
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        let layout = match self {
            TimestampFormat::UtcSeconds => "%Y-%m-%d %H:%M:%S UTC",
            TimestampFormat::UtcMillis => "%Y-%m-%d %H:%M:%S%.3f UTC",
        };
        datetime.format(layout).to_string()
    }

    /// Format the current time
    #[must_use]
    pub fn now(&self) -> String {
        self.format(&Utc::now())
    }
}
