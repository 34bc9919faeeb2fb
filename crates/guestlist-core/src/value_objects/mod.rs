//! Value objects - immutable types that represent domain concepts

mod guest_type;
mod invitation_type;
mod shift;

pub use guest_type::GuestType;
pub use invitation_type::InvitationType;
pub use shift::{Shift, ShiftParseError};
