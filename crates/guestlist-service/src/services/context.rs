//! Service context - dependency container for services
//!
//! Holds the repositories and the database pool needed by services.

use std::sync::Arc;

use guestlist_core::traits::{GuestGroupRepository, GuestRepository};
use guestlist_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to the database pool (for health checks) and the
/// guest and group repositories.
#[derive(Clone)]
pub struct ServiceContext {
    pool: PgPool,
    guest_repo: Arc<dyn GuestRepository>,
    group_repo: Arc<dyn GuestGroupRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        guest_repo: Arc<dyn GuestRepository>,
        group_repo: Arc<dyn GuestGroupRepository>,
    ) -> Self {
        Self {
            pool,
            guest_repo,
            group_repo,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the guest repository
    pub fn guest_repo(&self) -> &dyn GuestRepository {
        self.guest_repo.as_ref()
    }

    /// Get the guest group repository
    pub fn group_repo(&self) -> &dyn GuestGroupRepository {
        self.group_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    guest_repo: Option<Arc<dyn GuestRepository>>,
    group_repo: Option<Arc<dyn GuestGroupRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn guest_repo(mut self, repo: Arc<dyn GuestRepository>) -> Self {
        self.guest_repo = Some(repo);
        self
    }

    pub fn group_repo(mut self, repo: Arc<dyn GuestGroupRepository>) -> Self {
        self.group_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| super::error::ServiceError::validation("pool is required"))?,
            self.guest_repo
                .ok_or_else(|| super::error::ServiceError::validation("guest_repo is required"))?,
            self.group_repo
                .ok_or_else(|| super::error::ServiceError::validation("group_repo is required"))?,
        ))
    }
}
