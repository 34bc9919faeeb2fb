//! PostgreSQL implementation of GuestRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use guestlist_core::entities::{Guest, NewGuest};
use guestlist_core::traits::{GuestFilter, GuestRepository, RepoResult};

use crate::models::GuestModel;

use super::error::{guest_not_found, map_db_error};

const GUEST_COLUMNS: &str =
    "id, name, address, wedding_location, invitation_time, invitation_type, guest_type, guest_group";

/// PostgreSQL implementation of GuestRepository
#[derive(Clone)]
pub struct PgGuestRepository {
    pool: PgPool,
}

impl PgGuestRepository {
    /// Create a new PgGuestRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Turn a search term into an ILIKE pattern, escaping LIKE metacharacters
/// so the term matches as a literal substring.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

/// Append the filter's WHERE clause to a query.
///
/// Every present filter becomes one AND-ed predicate. The search term
/// matches case-insensitively against name, address, and wedding location,
/// with null fields treated as empty strings.
fn apply_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &GuestFilter) {
    let mut first = true;
    macro_rules! prefix {
        () => {
            if first {
                builder.push(" WHERE ");
                first = false;
            } else {
                builder.push(" AND ");
            }
        };
    }

    if let Some(search) = &filter.search {
        let pattern = like_pattern(search);
        prefix!();
        builder.push("(name ILIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR COALESCE(address, '') ILIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR COALESCE(wedding_location, '') ILIKE ");
        builder.push_bind(pattern);
        builder.push(")");
    }
    if let Some(location) = &filter.location {
        prefix!();
        builder.push("wedding_location = ");
        builder.push_bind(location.clone());
    }
    if let Some(invitation_type) = filter.invitation_type {
        prefix!();
        builder.push("invitation_type = ");
        builder.push_bind(invitation_type.as_str());
    }
    if let Some(guest_type) = filter.guest_type {
        prefix!();
        builder.push("guest_type = ");
        builder.push_bind(guest_type.as_str());
    }
    if let Some(group) = &filter.group {
        prefix!();
        builder.push("guest_group = ");
        builder.push_bind(group.clone());
    }
}

#[async_trait]
impl GuestRepository for PgGuestRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Guest>> {
        let result = sqlx::query_as::<_, GuestModel>(
            r"
            SELECT id, name, address, wedding_location, invitation_time,
                   invitation_type, guest_type, guest_group
            FROM guests
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Guest::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: &GuestFilter, limit: i64, offset: i64) -> RepoResult<Vec<Guest>> {
        let mut builder = QueryBuilder::new(format!("SELECT {GUEST_COLUMNS} FROM guests"));
        apply_filter(&mut builder, filter);
        // Group name first, then id: a total order, so pages never overlap
        builder.push(" ORDER BY guest_group ASC, id ASC LIMIT ");
        builder.push_bind(limit);
        builder.push(" OFFSET ");
        builder.push_bind(offset);

        let rows = builder
            .build_query_as::<GuestModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Guest::from).collect())
    }

    #[instrument(skip(self))]
    async fn count(&self, filter: &GuestFilter) -> RepoResult<i64> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM guests");
        apply_filter(&mut builder, filter);

        builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn count_all(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM guests")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn distinct_locations(&self) -> RepoResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            r"
            SELECT DISTINCT wedding_location
            FROM guests
            WHERE wedding_location IS NOT NULL AND wedding_location <> ''
            ORDER BY wedding_location
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, guest))]
    async fn create(&self, guest: &NewGuest) -> RepoResult<Guest> {
        let row = sqlx::query_as::<_, GuestModel>(
            r"
            INSERT INTO guests (name, address, wedding_location, invitation_time,
                                invitation_type, guest_type, guest_group)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, address, wedding_location, invitation_time,
                      invitation_type, guest_type, guest_group
            ",
        )
        .bind(&guest.name)
        .bind(&guest.address)
        .bind(&guest.wedding_location)
        .bind(guest.invitation_time)
        .bind(guest.invitation_type.map(|t| t.as_str()))
        .bind(guest.guest_type.map(|t| t.as_str()))
        .bind(&guest.guest_group)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Guest::from(row))
    }

    #[instrument(skip(self, guest))]
    async fn update(&self, guest: &Guest) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE guests
            SET name = $2, address = $3, wedding_location = $4, invitation_time = $5,
                invitation_type = $6, guest_type = $7, guest_group = $8
            WHERE id = $1
            ",
        )
        .bind(guest.id)
        .bind(&guest.name)
        .bind(&guest.address)
        .bind(&guest.wedding_location)
        .bind(guest.invitation_time)
        .bind(guest.invitation_type.map(|t| t.as_str()))
        .bind(guest.guest_type.map(|t| t.as_str()))
        .bind(&guest.guest_group)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(guest_not_found(guest.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM guests WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(guest_not_found(id));
        }

        Ok(())
    }
}
