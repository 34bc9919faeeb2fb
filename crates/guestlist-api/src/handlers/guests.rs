//! Guest handlers
//!
//! Endpoints for listing, creating, editing, deleting, and exporting guests.

use axum::{
    extract::{Path, State},
    Json,
};
use guestlist_service::{
    ApiResponse, CreateGuestRequest, GuestListResponse, GuestResponse, GuestService,
    UpdateGuestRequest,
};

use crate::extractors::{ExportQuery, GuestListQuery, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Parse a path id as a positive integer
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id >= 1)
        .ok_or_else(|| ApiError::invalid_path("Invalid id"))
}

/// List guests with filters and pagination
///
/// GET /guests
pub async fn list_guests(
    State(state): State<AppState>,
    query: GuestListQuery,
) -> ApiResult<Json<GuestListResponse>> {
    let service = GuestService::new(state.service_context());
    let response = service
        .list_guests(&query.filter, query.page, query.limit)
        .await?;
    Ok(Json(response))
}

/// Create a new guest
///
/// POST /guests
pub async fn create_guest(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateGuestRequest>,
) -> ApiResult<Created<Json<GuestResponse>>> {
    let service = GuestService::new(state.service_context());
    let response = service.create_guest(request).await?;
    Ok(Created(Json(response)))
}

/// Export guests matching the filters, without pagination
///
/// GET /guests/export
pub async fn export_guests(
    State(state): State<AppState>,
    query: ExportQuery,
) -> ApiResult<Json<ApiResponse<Vec<GuestResponse>>>> {
    let service = GuestService::new(state.service_context());
    let response = service.export_guests(&query.filter).await?;
    Ok(Json(response))
}

/// Get guest by ID
///
/// GET /guests/{id}
pub async fn get_guest(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<GuestResponse>> {
    let id = parse_id(&id)?;

    let service = GuestService::new(state.service_context());
    let response = service.get_guest(id).await?;
    Ok(Json(response))
}

/// Partially update a guest
///
/// PUT /guests/{id}
pub async fn update_guest(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateGuestRequest>,
) -> ApiResult<Json<GuestResponse>> {
    let id = parse_id(&id)?;

    let service = GuestService::new(state.service_context());
    let response = service.update_guest(id, request).await?;
    Ok(Json(response))
}

/// Delete a guest
///
/// DELETE /guests/{id}
pub async fn delete_guest(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<NoContent> {
    let id = parse_id(&id)?;

    let service = GuestService::new(state.service_context());
    service.delete_guest(id).await?;
    Ok(NoContent)
}
