//! Guest group handlers
//!
//! Endpoints for group management, including the rename cascade and
//! delete-with-orphaning.

use axum::{
    extract::{Path, State},
    Json,
};
use guestlist_service::{
    CreateGroupRequest, GroupResponse, GroupService, GroupWithCountResponse, RenameGroupRequest,
};

use crate::extractors::ValidatedJson;
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id >= 1)
        .ok_or_else(|| ApiError::invalid_path("Invalid id"))
}

/// List groups with guest counts
///
/// GET /guest-groups
pub async fn list_groups(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<GroupWithCountResponse>>> {
    let service = GroupService::new(state.service_context());
    let response = service.list_groups().await?;
    Ok(Json(response))
}

/// Create a new group
///
/// POST /guest-groups
pub async fn create_group(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateGroupRequest>,
) -> ApiResult<Created<Json<GroupResponse>>> {
    let service = GroupService::new(state.service_context());
    let response = service.create_group(request).await?;
    Ok(Created(Json(response)))
}

/// Rename a group, cascading onto referencing guests
///
/// PUT /guest-groups/{id}
pub async fn rename_group(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<RenameGroupRequest>,
) -> ApiResult<Json<GroupResponse>> {
    let id = parse_id(&id)?;

    let service = GroupService::new(state.service_context());
    let response = service.rename_group(id, request).await?;
    Ok(Json(response))
}

/// Delete a group, orphaning its guests
///
/// DELETE /guest-groups/{id}
pub async fn delete_group(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<NoContent> {
    let id = parse_id(&id)?;

    let service = GroupService::new(state.service_context());
    service.delete_group(id).await?;
    Ok(NoContent)
}
