//! Guest group database models

use sqlx::FromRow;

/// Database model for the guest_groups table
#[derive(Debug, Clone, FromRow)]
pub struct GuestGroupModel {
    pub id: i64,
    pub name: String,
}

/// Row shape for the group listing with guest counts
#[derive(Debug, Clone, FromRow)]
pub struct GroupCountModel {
    pub id: i64,
    pub name: String,
    pub guest_count: i64,
}
