//! Guest database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the guests table
///
/// Enum-like columns are stored as plain TEXT; normalization to the typed
/// value objects happens in the mapper, where unknown values become None.
#[derive(Debug, Clone, FromRow)]
pub struct GuestModel {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub wedding_location: Option<String>,
    pub invitation_time: Option<DateTime<Utc>>,
    pub invitation_type: Option<String>,
    pub guest_type: Option<String>,
    pub guest_group: Option<String>,
}
