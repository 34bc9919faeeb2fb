//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in
//! guestlist-core. Each repository handles database operations for a
//! specific domain entity.

mod error;
mod guest;
mod guest_group;

pub use guest::PgGuestRepository;
pub use guest_group::PgGuestGroupRepository;
