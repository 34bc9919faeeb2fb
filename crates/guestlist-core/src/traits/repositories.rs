//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{GroupWithCount, Guest, GuestGroup, NewGuest};
use crate::error::DomainError;
use crate::value_objects::{GuestType, InvitationType, Shift};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Guest Repository
// ============================================================================

/// Filter parameters for guest queries
///
/// All present filters combine with logical AND. Unset fields do not
/// constrain the result. Invalid enum values never reach this struct; the
/// request layer drops them before building a filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuestFilter {
    /// Case-insensitive substring match against name, address, and
    /// wedding location; a guest matches if any of the three fields hits.
    pub search: Option<String>,
    /// Exact match on wedding location
    pub location: Option<String>,
    /// Exact match on invitation type
    pub invitation_type: Option<InvitationType>,
    /// Exact match on guest type
    pub guest_type: Option<GuestType>,
    /// Exact match on group name
    pub group: Option<String>,
}

impl GuestFilter {
    /// True when no filter is set (the query covers every guest)
    pub fn is_empty(&self) -> bool {
        self.search.is_none()
            && self.location.is_none()
            && self.invitation_type.is_none()
            && self.guest_type.is_none()
            && self.group.is_none()
    }
}

#[async_trait]
pub trait GuestRepository: Send + Sync {
    /// Find guest by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Guest>>;

    /// List guests matching the filter, ordered by group name then id.
    ///
    /// The ordering is total, so identical (filter, limit, offset) inputs
    /// always produce the same slice.
    async fn list(&self, filter: &GuestFilter, limit: i64, offset: i64) -> RepoResult<Vec<Guest>>;

    /// Count guests matching the filter
    async fn count(&self, filter: &GuestFilter) -> RepoResult<i64>;

    /// Count all guests regardless of filter
    async fn count_all(&self) -> RepoResult<i64>;

    /// Distinct non-empty wedding locations across all guests
    async fn distinct_locations(&self) -> RepoResult<Vec<String>>;

    /// Insert a new guest; the store assigns the id
    async fn create(&self, guest: &NewGuest) -> RepoResult<Guest>;

    /// Update an existing guest (full row write)
    async fn update(&self, guest: &Guest) -> RepoResult<()>;

    /// Delete a guest by id
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Guest Group Repository
// ============================================================================

#[async_trait]
pub trait GuestGroupRepository: Send + Sync {
    /// Find group by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<GuestGroup>>;

    /// List all groups with their guest counts, ordered by name
    async fn list_with_counts(&self) -> RepoResult<Vec<GroupWithCount>>;

    /// All group names, sorted ascending
    async fn names(&self) -> RepoResult<Vec<String>>;

    /// Create a new group; a duplicate name is a conflict
    async fn create(&self, name: &str) -> RepoResult<GuestGroup>;

    /// Idempotently ensure a group row exists for the name.
    ///
    /// Used when a guest write references a group; two concurrent callers
    /// naming the same new group must both succeed.
    async fn ensure_exists(&self, name: &str) -> RepoResult<()>;

    /// Rename a group and cascade the new name onto every guest whose
    /// `guest_group` equals the old name, as one atomic unit.
    ///
    /// When `shift` is given, every guest in the (renamed) group with an
    /// invitation time additionally has it moved into the shift's window,
    /// preserving the date. The shift rewrite commits or rolls back with
    /// the rename; partial application is not possible.
    async fn rename(&self, id: i64, new_name: &str, shift: Option<Shift>)
        -> RepoResult<GuestGroup>;

    /// Delete a group, first orphaning every referencing guest
    /// (`guest_group` set to null). Guests are never deleted.
    async fn delete(&self, id: i64) -> RepoResult<()>;
}
