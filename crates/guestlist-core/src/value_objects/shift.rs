//! Reception shift - fixed time-of-day windows for venue capacity

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the three reception time windows
///
/// Guests are scheduled into shifts so the venue never holds everyone at
/// once. Only the start time is recorded on a guest's invitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
    /// 10:00 - 11:00
    Shift1,
    /// 11:00 - 12:30
    Shift2,
    /// 12:30 - 13:00
    Shift3,
}

/// Error when parsing an unknown shift value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown shift: {0}")]
pub struct ShiftParseError(pub String);

impl Shift {
    /// Start of the window as (hour, minute)
    pub fn start_time(&self) -> (u32, u32) {
        match self {
            Self::Shift1 => (10, 0),
            Self::Shift2 => (11, 0),
            Self::Shift3 => (12, 30),
        }
    }

    /// Wire form as used in API payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Shift1 => "shift1",
            Self::Shift2 => "shift2",
            Self::Shift3 => "shift3",
        }
    }

    /// Move a timestamp into this shift's window, preserving its date.
    ///
    /// Seconds and sub-second precision are zeroed; only the time of day
    /// changes.
    pub fn apply_to(&self, ts: DateTime<Utc>) -> DateTime<Utc> {
        let (hour, minute) = self.start_time();
        ts.with_hour(hour)
            .and_then(|t| t.with_minute(minute))
            .and_then(|t| t.with_second(0))
            .and_then(|t| t.with_nanosecond(0))
            // with_hour/with_minute cannot fail for these fixed in-range values
            .unwrap_or(ts)
    }
}

impl FromStr for Shift {
    type Err = ShiftParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shift1" => Ok(Self::Shift1),
            "shift2" => Ok(Self::Shift2),
            "shift3" => Ok(Self::Shift3),
            other => Err(ShiftParseError(other.to_string())),
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
