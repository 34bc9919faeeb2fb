//! Invitation type - how the invitation is delivered

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Delivery channel for an invitation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvitationType {
    Physical,
    Digital,
}

impl InvitationType {
    /// String form as stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Physical => "physical",
            Self::Digital => "digital",
        }
    }

    /// Parse a wire value, treating anything unrecognized as unset.
    ///
    /// Callers normalize free-form input this way instead of rejecting it:
    /// an invalid value behaves as if the field were omitted.
    pub fn parse_lenient(value: &str) -> Option<Self> {
        value.parse().ok()
    }
}

impl FromStr for InvitationType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "physical" => Ok(Self::Physical),
            "digital" => Ok(Self::Digital),
            _ => Err(()),
        }
    }
}

impl fmt::Display for InvitationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
