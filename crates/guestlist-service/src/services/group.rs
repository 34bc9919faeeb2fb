//! Guest group service
//!
//! Handles group creation, the rename cascade, and deletion with
//! guest orphaning.

use guestlist_core::value_objects::Shift;
use tracing::{info, instrument};

use crate::dto::{CreateGroupRequest, GroupResponse, GroupWithCountResponse, RenameGroupRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Guest group service
pub struct GroupService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GroupService<'a> {
    /// Create a new GroupService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all groups with their guest counts, ordered by name
    #[instrument(skip(self))]
    pub async fn list_groups(&self) -> ServiceResult<Vec<GroupWithCountResponse>> {
        let groups = self.ctx.group_repo().list_with_counts().await?;
        Ok(groups.into_iter().map(GroupWithCountResponse::from).collect())
    }

    /// Create a new group; a duplicate name is a conflict
    #[instrument(skip(self, request))]
    pub async fn create_group(&self, request: CreateGroupRequest) -> ServiceResult<GroupResponse> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(ServiceError::validation("name is required"));
        }

        let group = self.ctx.group_repo().create(name).await?;

        info!(group_id = group.id, "Guest group created");

        Ok(GroupResponse::from(group))
    }

    /// Rename a group, cascading the new name onto every referencing guest.
    ///
    /// When the request names a shift, every scheduled guest in the group is
    /// additionally moved into that time window. Rename, cascade, and shift
    /// rewrite commit or fail as one unit.
    #[instrument(skip(self, request))]
    pub async fn rename_group(
        &self,
        id: i64,
        request: RenameGroupRequest,
    ) -> ServiceResult<GroupResponse> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(ServiceError::validation("name is required"));
        }

        let shift = request
            .shift
            .as_deref()
            .map(str::parse::<Shift>)
            .transpose()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let group = self.ctx.group_repo().rename(id, name, shift).await?;

        info!(group_id = group.id, shift = ?shift, "Guest group renamed");

        Ok(GroupResponse::from(group))
    }

    /// Delete a group, orphaning its guests (their rows survive with the
    /// group label cleared)
    #[instrument(skip(self))]
    pub async fn delete_group(&self, id: i64) -> ServiceResult<()> {
        self.ctx.group_repo().delete(id).await?;

        info!(group_id = id, "Guest group deleted");

        Ok(())
    }
}
