//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output, camelCase.

use chrono::{DateTime, Utc};
use guestlist_core::value_objects::{GuestType, InvitationType};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

// ============================================================================
// Guest Responses
// ============================================================================

/// Single guest record
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestResponse {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub wedding_location: Option<String>,
    pub invitation_time: Option<DateTime<Utc>>,
    pub invitation_type: Option<InvitationType>,
    pub guest_type: Option<GuestType>,
    pub guest_group: Option<String>,
}

/// Guest listing envelope
///
/// `total` counts the filtered set (pagination math); `totalAll` counts
/// every guest regardless of filter. `uniqueLocations` and
/// `guestGroupNames` are unfiltered facets for the UI's dropdowns.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestListResponse {
    pub data: Vec<GuestResponse>,
    pub total: i64,
    pub total_all: i64,
    pub unique_locations: Vec<String>,
    pub guest_group_names: Vec<String>,
}

// ============================================================================
// Guest Group Responses
// ============================================================================

/// Basic group record
#[derive(Debug, Clone, Serialize)]
pub struct GroupResponse {
    pub id: i64,
    pub name: String,
}

/// Group record with the number of referencing guests
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupWithCountResponse {
    pub id: i64,
    pub name: String,
    pub guest_count: i64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness probe response with dependency health
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
}

impl ReadinessResponse {
    pub fn ready(database: bool) -> Self {
        Self {
            status: if database { "ready" } else { "not ready" },
            database,
        }
    }
}
