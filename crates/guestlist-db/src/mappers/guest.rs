//! Guest entity <-> model mapper

use guestlist_core::entities::Guest;
use guestlist_core::value_objects::{GuestType, InvitationType};

use crate::models::GuestModel;

/// Convert GuestModel to Guest entity
///
/// Enum columns are TEXT in the store; a value that no longer parses (for
/// example after a manual edit) maps to None rather than failing the row.
impl From<GuestModel> for Guest {
    fn from(model: GuestModel) -> Self {
        Guest {
            id: model.id,
            name: model.name,
            address: model.address,
            wedding_location: model.wedding_location,
            invitation_time: model.invitation_time,
            invitation_type: model
                .invitation_type
                .as_deref()
                .and_then(InvitationType::parse_lenient),
            guest_type: model.guest_type.as_deref().and_then(GuestType::parse_lenient),
            guest_group: model.guest_group,
        }
    }
}
