//! Guest type - whether the invitee comes as a couple or alone

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Attendance category for a guest
///
/// `Sekaliyan` is a couple invitation, `Sendiri` a single one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuestType {
    Sekaliyan,
    Sendiri,
}

impl GuestType {
    /// String form as stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sekaliyan => "sekaliyan",
            Self::Sendiri => "sendiri",
        }
    }

    /// Parse a wire value, treating anything unrecognized as unset.
    pub fn parse_lenient(value: &str) -> Option<Self> {
        value.parse().ok()
    }
}

impl FromStr for GuestType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sekaliyan" => Ok(Self::Sekaliyan),
            "sendiri" => Ok(Self::Sendiri),
            _ => Err(()),
        }
    }
}

impl fmt::Display for GuestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
