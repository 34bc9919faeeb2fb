//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input
//! validation. Enum-like guest fields deserialize as plain strings; the
//! service layer normalizes them leniently (unknown values become null)
//! instead of rejecting the request.

use serde::{Deserialize, Deserializer};
use validator::Validate;

/// Deserialize a field that distinguishes "absent" from "explicitly null":
/// outer None = absent, Some(None) = null, Some(Some(v)) = value.
fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

// ============================================================================
// Guest Requests
// ============================================================================

/// Create guest request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGuestRequest {
    #[validate(length(max = 200, message = "Name must be at most 200 characters"))]
    pub name: String,

    pub address: Option<String>,

    pub wedding_location: Option<String>,

    /// RFC 3339 or `YYYY-MM-DDTHH:MM` timestamp; unparseable values are
    /// stored as null
    pub invitation_time: Option<String>,

    /// "physical" or "digital"; anything else is stored as null
    pub invitation_type: Option<String>,

    /// "sekaliyan" or "sendiri"; anything else is stored as null
    pub guest_type: Option<String>,

    pub guest_group: Option<String>,
}

/// Update guest request
///
/// Partial update: a field left out of the body is not touched, a field set
/// to null is cleared. `name` can be changed but never cleared.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGuestRequest {
    #[validate(length(max = 200, message = "Name must be at most 200 characters"))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    pub address: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    pub wedding_location: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    pub invitation_time: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    pub invitation_type: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    pub guest_type: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    pub guest_group: Option<Option<String>>,
}

impl UpdateGuestRequest {
    /// True when the body changes nothing
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.address.is_none()
            && self.wedding_location.is_none()
            && self.invitation_time.is_none()
            && self.invitation_type.is_none()
            && self.guest_type.is_none()
            && self.guest_group.is_none()
    }
}

// ============================================================================
// Guest Group Requests
// ============================================================================

/// Create group request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGroupRequest {
    #[validate(length(max = 200, message = "Name must be at most 200 characters"))]
    pub name: String,
}

/// Rename group request
///
/// `shift`, when present, moves every scheduled guest in the group into the
/// named time window as part of the same operation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RenameGroupRequest {
    #[validate(length(max = 200, message = "Name must be at most 200 characters"))]
    pub name: String,

    /// "shift1", "shift2", or "shift3"
    pub shift: Option<String>,
}
