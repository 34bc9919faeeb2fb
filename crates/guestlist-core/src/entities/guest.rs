//! Guest entity - a single invitee record

use chrono::{DateTime, Utc};

use crate::value_objects::{GuestType, InvitationType};

/// Invitee entity
///
/// `guest_group` holds the *name* of a group, not its id. The group catalog
/// is reconciled on writes but never enforced by the store, so the value may
/// point at a group that no longer exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guest {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub wedding_location: Option<String>,
    pub invitation_time: Option<DateTime<Utc>>,
    pub invitation_type: Option<InvitationType>,
    pub guest_type: Option<GuestType>,
    pub guest_group: Option<String>,
}

impl Guest {
    /// Check whether the guest belongs to the named group
    #[inline]
    pub fn is_in_group(&self, group_name: &str) -> bool {
        self.guest_group.as_deref() == Some(group_name)
    }

    /// Clear the group reference (orphaning, not deletion)
    pub fn orphan(&mut self) {
        self.guest_group = None;
    }
}

/// Field set for inserting a guest; the store assigns the id
#[derive(Debug, Clone, Default)]
pub struct NewGuest {
    pub name: String,
    pub address: Option<String>,
    pub wedding_location: Option<String>,
    pub invitation_time: Option<DateTime<Utc>>,
    pub invitation_type: Option<InvitationType>,
    pub guest_type: Option<GuestType>,
    pub guest_group: Option<String>,
}

impl NewGuest {
    /// Create an insert record with only the required name set
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
