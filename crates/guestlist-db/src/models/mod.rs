//! Database models - SQLx-compatible structs for PostgreSQL tables

mod guest;
mod guest_group;

pub use guest::GuestModel;
pub use guest_group::{GroupCountModel, GuestGroupModel};
