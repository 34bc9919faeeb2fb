//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests. Names and group
//! names carry a unique suffix so tests stay isolated on a shared
//! database.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() as u64)
        .unwrap_or(0);
    let count = COUNTER.fetch_add(1, Ordering::SeqCst);
    nanos * 10_000 + count
}

/// Get a unique group name
pub fn unique_group_name(prefix: &str) -> String {
    format!("{prefix}{}", unique_suffix())
}

/// Create guest request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGuestRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wedding_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invitation_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invitation_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_group: Option<String>,
}

impl CreateGuestRequest {
    /// A minimal unique guest
    pub fn unique() -> Self {
        Self {
            name: format!("Tamu {}", unique_suffix()),
            address: None,
            wedding_location: None,
            invitation_time: None,
            invitation_type: None,
            guest_type: None,
            guest_group: None,
        }
    }

    /// A unique guest assigned to the given group
    pub fn in_group(group: &str) -> Self {
        Self {
            guest_group: Some(group.to_string()),
            ..Self::unique()
        }
    }
}

/// Create / rename group request
#[derive(Debug, Clone, Serialize)]
pub struct GroupRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift: Option<String>,
}

impl GroupRequest {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            shift: None,
        }
    }
}

/// Guest response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestResponse {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub wedding_location: Option<String>,
    pub invitation_time: Option<String>,
    pub invitation_type: Option<String>,
    pub guest_type: Option<String>,
    pub guest_group: Option<String>,
}

/// Guest listing envelope
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestListResponse {
    pub data: Vec<GuestResponse>,
    pub total: i64,
    pub total_all: i64,
    pub unique_locations: Vec<String>,
    pub guest_group_names: Vec<String>,
}

/// Export envelope
#[derive(Debug, Deserialize)]
pub struct ExportResponse {
    pub data: Vec<GuestResponse>,
}

/// Group response
#[derive(Debug, Clone, Deserialize)]
pub struct GroupResponse {
    pub id: i64,
    pub name: String,
}

/// Group listing entry
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupWithCountResponse {
    pub id: i64,
    pub name: String,
    pub guest_count: i64,
}

/// Error body
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
