//! Timestamp formatting utilities
//!
//! Event timestamps are rendered at capture time, in the local timezone.
//! The default `Compact` form is `yyMMdd HHmmssSSS`.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Compact local time: `250108 103045123`
    #[default]
    Compact,

    /// ISO 8601 with milliseconds and offset: `2025-01-08T10:30:45.123+0000`
    Iso8601,

    /// RFC 3339: `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Custom strftime format string
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Local>) -> String {
        match self {
            TimestampFormat::Compact => datetime.format("%y%m%d %H%M%S%3f").to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3f%z").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }

    /// Format the current local time.
    #[must_use]
    pub fn now(&self) -> String {
        self.format(&Local::now())
    }
}
