//! Domain entity -> response DTO mappers

use guestlist_core::entities::{GroupWithCount, Guest, GuestGroup};

use super::responses::{GroupResponse, GroupWithCountResponse, GuestResponse};

impl From<&Guest> for GuestResponse {
    fn from(guest: &Guest) -> Self {
        Self {
            id: guest.id,
            name: guest.name.clone(),
            address: guest.address.clone(),
            wedding_location: guest.wedding_location.clone(),
            invitation_time: guest.invitation_time,
            invitation_type: guest.invitation_type,
            guest_type: guest.guest_type,
            guest_group: guest.guest_group.clone(),
        }
    }
}

impl From<Guest> for GuestResponse {
    fn from(guest: Guest) -> Self {
        Self::from(&guest)
    }
}

impl From<&GuestGroup> for GroupResponse {
    fn from(group: &GuestGroup) -> Self {
        Self {
            id: group.id,
            name: group.name.clone(),
        }
    }
}

impl From<GuestGroup> for GroupResponse {
    fn from(group: GuestGroup) -> Self {
        Self::from(&group)
    }
}

impl From<GroupWithCount> for GroupWithCountResponse {
    fn from(with_count: GroupWithCount) -> Self {
        Self {
            id: with_count.group.id,
            name: with_count.group.name,
            guest_count: with_count.guest_count,
        }
    }
}
