//! Repository traits (ports) - interfaces for data access

mod repositories;

pub use repositories::{GuestFilter, GuestGroupRepository, GuestRepository, RepoResult};
