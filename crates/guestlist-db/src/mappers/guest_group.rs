//! Guest group entity <-> model mapper

use guestlist_core::entities::{GroupWithCount, GuestGroup};

use crate::models::{GroupCountModel, GuestGroupModel};

/// Convert GuestGroupModel to GuestGroup entity
impl From<GuestGroupModel> for GuestGroup {
    fn from(model: GuestGroupModel) -> Self {
        GuestGroup {
            id: model.id,
            name: model.name,
        }
    }
}

/// Convert a counted listing row to the domain pair
impl From<GroupCountModel> for GroupWithCount {
    fn from(model: GroupCountModel) -> Self {
        GroupWithCount {
            group: GuestGroup {
                id: model.id,
                name: model.name,
            },
            guest_count: model.guest_count,
        }
    }
}
