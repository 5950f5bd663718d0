//! Time display configuration section.

use chrono::{Local, Utc};
use serde::{Deserialize, Serialize};

use super::defaults;
use crate::error::Result;
use crate::time::format_timestamp_in;

/// Timezone used when rendering wall-clock timestamps
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Clock {
    /// Host's local timezone
    #[default]
    Local,
    /// Coordinated Universal Time
    Utc,
}

/// Time display settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TimeSection {
    /// Append `:mmm` to wall-clock timestamps
    #[serde(default = "defaults::show_milliseconds")]
    pub show_milliseconds: bool,

    /// Timezone for wall-clock timestamps
    #[serde(default = "defaults::clock")]
    pub clock: Clock,
}

impl Default for TimeSection {
    fn default() -> Self {
        Self {
            show_milliseconds: defaults::show_milliseconds(),
            clock: defaults::clock(),
        }
    }
}

impl TimeSection {
    /// Format an epoch timestamp (ms) using the configured clock and precision
    pub fn format_timestamp(&self, timestamp_ms: i64) -> Result<String> {
        match self.clock {
            Clock::Local => format_timestamp_in(&Local, timestamp_ms, self.show_milliseconds),
            Clock::Utc => format_timestamp_in(&Utc, timestamp_ms, self.show_milliseconds),
        }
    }
}
