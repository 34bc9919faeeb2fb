//! Guest group entity - a named collection label for guests

/// Named group of guests, unique by name
///
/// Guests reference groups by name string (see [`crate::entities::Guest`]),
/// so renaming a group requires cascading the new name onto every
/// referencing guest row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestGroup {
    pub id: i64,
    pub name: String,
}

/// Group together with the number of guests currently referencing it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupWithCount {
    pub group: GuestGroup,
    pub guest_count: i64,
}
