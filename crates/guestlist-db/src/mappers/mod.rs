//! Entity <-> model mappers

mod guest;
mod guest_group;
