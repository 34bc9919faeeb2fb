//! PostgreSQL implementation of GuestGroupRepository
//!
//! Guests reference groups by name, so the rename and delete operations
//! rewrite guest rows in the same transaction as the group row. A reader
//! never observes a group renamed while its guests still carry the old name.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use guestlist_core::entities::{GroupWithCount, GuestGroup};
use guestlist_core::traits::{GuestGroupRepository, RepoResult};
use guestlist_core::value_objects::Shift;
use guestlist_core::DomainError;

use crate::models::{GroupCountModel, GuestGroupModel};

use super::error::{group_not_found, map_db_error, map_unique_violation};

/// PostgreSQL implementation of GuestGroupRepository
#[derive(Clone)]
pub struct PgGuestGroupRepository {
    pool: PgPool,
}

impl PgGuestGroupRepository {
    /// Create a new PgGuestGroupRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GuestGroupRepository for PgGuestGroupRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<GuestGroup>> {
        let result = sqlx::query_as::<_, GuestGroupModel>(
            "SELECT id, name FROM guest_groups WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(GuestGroup::from))
    }

    #[instrument(skip(self))]
    async fn list_with_counts(&self) -> RepoResult<Vec<GroupWithCount>> {
        let rows = sqlx::query_as::<_, GroupCountModel>(
            r"
            SELECT gg.id, gg.name, COUNT(g.id) AS guest_count
            FROM guest_groups gg
            LEFT JOIN guests g ON g.guest_group = gg.name
            GROUP BY gg.id, gg.name
            ORDER BY gg.name
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(GroupWithCount::from).collect())
    }

    #[instrument(skip(self))]
    async fn names(&self) -> RepoResult<Vec<String>> {
        sqlx::query_scalar::<_, String>("SELECT name FROM guest_groups ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn create(&self, name: &str) -> RepoResult<GuestGroup> {
        let row = sqlx::query_as::<_, GuestGroupModel>(
            "INSERT INTO guest_groups (name) VALUES ($1) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::GroupNameTaken(name.to_string())))?;

        Ok(GuestGroup::from(row))
    }

    #[instrument(skip(self))]
    async fn ensure_exists(&self, name: &str) -> RepoResult<()> {
        // Idempotent: concurrent creators of the same new group both succeed
        sqlx::query("INSERT INTO guest_groups (name) VALUES ($1) ON CONFLICT (name) DO NOTHING")
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn rename(
        &self,
        id: i64,
        new_name: &str,
        shift: Option<Shift>,
    ) -> RepoResult<GuestGroup> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Lock the group row so concurrent renames serialize on it
        let existing = sqlx::query_as::<_, GuestGroupModel>(
            "SELECT id, name FROM guest_groups WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| group_not_found(id))?;

        sqlx::query("UPDATE guest_groups SET name = $2 WHERE id = $1")
            .bind(id)
            .bind(new_name)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                map_unique_violation(e, || DomainError::GroupNameTaken(new_name.to_string()))
            })?;

        // Cascade by value: every guest carrying the old name moves over
        sqlx::query("UPDATE guests SET guest_group = $2 WHERE guest_group = $1")
            .bind(&existing.name)
            .bind(new_name)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if let Some(shift) = shift {
            let scheduled: Vec<(i64, DateTime<Utc>)> = sqlx::query_as(
                r"
                SELECT id, invitation_time
                FROM guests
                WHERE guest_group = $1 AND invitation_time IS NOT NULL
                FOR UPDATE
                ",
            )
            .bind(new_name)
            .fetch_all(&mut *tx)
            .await
            .map_err(map_db_error)?;

            // Guests without an invitation time have no date to preserve
            // and are left untouched.
            for (guest_id, ts) in scheduled {
                sqlx::query("UPDATE guests SET invitation_time = $2 WHERE id = $1")
                    .bind(guest_id)
                    .bind(shift.apply_to(ts))
                    .execute(&mut *tx)
                    .await
                    .map_err(map_db_error)?;
            }
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(GuestGroup {
            id,
            name: new_name.to_string(),
        })
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let existing = sqlx::query_as::<_, GuestGroupModel>(
            "SELECT id, name FROM guest_groups WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| group_not_found(id))?;

        // Orphan first: guests keep their rows, only the label is cleared
        sqlx::query("UPDATE guests SET guest_group = NULL WHERE guest_group = $1")
            .bind(&existing.name)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        sqlx::query("DELETE FROM guest_groups WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
