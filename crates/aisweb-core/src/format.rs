//! Display formatting helpers.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Timezone the club's events are scheduled in.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::Chicago;

/// Suffix appended to formatted event times.
pub const DEFAULT_TIMEZONE_LABEL: &str = "CST";

const EVENT_TIME_FORMAT: &str = "%b %-d, %Y @ %-I:%M %P";

/// How times are shown to visitors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    /// IANA timezone the times are converted to.
    pub timezone: Tz,
    /// Label printed after the time. Fixed, regardless of daylight saving.
    pub timezone_label: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE,
            timezone_label: DEFAULT_TIMEZONE_LABEL.to_string(),
        }
    }
}

impl DisplayOptions {
    /// Formats an event start time, e.g. `Feb 5, 2025 @ 4:00 pm CST`.
    pub fn event_time(&self, at: DateTime<Utc>) -> String {
        format!(
            "{} {}",
            at.with_timezone(&self.timezone).format(EVENT_TIME_FORMAT),
            self.timezone_label
        )
    }
}

/// Escapes text for HTML display.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
