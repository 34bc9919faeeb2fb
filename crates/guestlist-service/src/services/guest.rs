//! Guest service
//!
//! Handles guest listing, creation, partial updates, deletion, and export.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use guestlist_core::entities::NewGuest;
use guestlist_core::traits::GuestFilter;
use guestlist_core::value_objects::{GuestType, InvitationType};
use tracing::{info, instrument};

use crate::dto::{
    ApiResponse, CreateGuestRequest, GuestListResponse, GuestResponse, UpdateGuestRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Hard cap on export result size; well above any realistic guest list
const EXPORT_LIMIT: i64 = 5000;

/// Trim free text, mapping empty strings to unset
fn normalize_text(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Parse a wire timestamp leniently.
///
/// Accepts RFC 3339 and the naive `YYYY-MM-DDTHH:MM[:SS]` form produced by
/// datetime-local inputs (interpreted as UTC). Anything else is None.
fn parse_invitation_time(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    None
}

/// Guest service
pub struct GuestService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GuestService<'a> {
    /// Create a new GuestService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List guests with filtering and pagination.
    ///
    /// Besides the requested page, the envelope carries the filtered count,
    /// the grand total, and the unfiltered facets (locations, group names)
    /// that the UI needs for its dropdowns.
    #[instrument(skip(self))]
    pub async fn list_guests(
        &self,
        filter: &GuestFilter,
        page: i64,
        limit: i64,
    ) -> ServiceResult<GuestListResponse> {
        let offset = (page - 1) * limit;

        let total = self.ctx.guest_repo().count(filter).await?;
        let total_all = self.ctx.guest_repo().count_all().await?;
        let unique_locations = self.ctx.guest_repo().distinct_locations().await?;
        let guest_group_names = self.ctx.group_repo().names().await?;
        let guests = self.ctx.guest_repo().list(filter, limit, offset).await?;

        Ok(GuestListResponse {
            data: guests.iter().map(GuestResponse::from).collect(),
            total,
            total_all,
            unique_locations,
            guest_group_names,
        })
    }

    /// Get guest by ID
    #[instrument(skip(self))]
    pub async fn get_guest(&self, id: i64) -> ServiceResult<GuestResponse> {
        let guest = self
            .ctx
            .guest_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Guest", id.to_string()))?;

        Ok(GuestResponse::from(guest))
    }

    /// Create a new guest.
    ///
    /// Field normalization is lenient: unknown enum values and unparseable
    /// timestamps become null rather than failing the request. A non-empty
    /// group name is reconciled into the group catalog first.
    #[instrument(skip(self, request))]
    pub async fn create_guest(&self, request: CreateGuestRequest) -> ServiceResult<GuestResponse> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(ServiceError::validation("name is required"));
        }

        let guest_group = normalize_text(request.guest_group);
        if let Some(group_name) = &guest_group {
            self.ctx.group_repo().ensure_exists(group_name).await?;
        }

        let new_guest = NewGuest {
            name: name.to_string(),
            address: normalize_text(request.address),
            wedding_location: normalize_text(request.wedding_location),
            invitation_time: request
                .invitation_time
                .as_deref()
                .and_then(parse_invitation_time),
            invitation_type: request
                .invitation_type
                .as_deref()
                .and_then(InvitationType::parse_lenient),
            guest_type: request.guest_type.as_deref().and_then(GuestType::parse_lenient),
            guest_group,
        };

        let guest = self.ctx.guest_repo().create(&new_guest).await?;

        info!(guest_id = guest.id, "Guest created");

        Ok(GuestResponse::from(guest))
    }

    /// Partially update a guest.
    ///
    /// Absent fields stay untouched; explicit nulls clear. The name can be
    /// replaced but never blanked. A present but unparseable invitation
    /// time leaves the stored value unchanged. Setting a non-empty group
    /// name reconciles the group catalog, same as creation.
    #[instrument(skip(self, request))]
    pub async fn update_guest(
        &self,
        id: i64,
        request: UpdateGuestRequest,
    ) -> ServiceResult<GuestResponse> {
        let mut guest = self
            .ctx
            .guest_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Guest", id.to_string()))?;

        if request.is_empty() {
            return Ok(GuestResponse::from(guest));
        }

        if let Some(name) = &request.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(ServiceError::validation("name cannot be empty"));
            }
            guest.name = name.to_string();
        }

        if let Some(address) = request.address {
            guest.address = normalize_text(address);
        }

        if let Some(wedding_location) = request.wedding_location {
            guest.wedding_location = normalize_text(wedding_location);
        }

        if let Some(invitation_time) = request.invitation_time {
            match invitation_time {
                None => guest.invitation_time = None,
                Some(raw) if raw.trim().is_empty() => guest.invitation_time = None,
                Some(raw) => {
                    if let Some(ts) = parse_invitation_time(&raw) {
                        guest.invitation_time = Some(ts);
                    }
                }
            }
        }

        if let Some(invitation_type) = request.invitation_type {
            guest.invitation_type = invitation_type
                .as_deref()
                .and_then(InvitationType::parse_lenient);
        }

        if let Some(guest_type) = request.guest_type {
            guest.guest_type = guest_type.as_deref().and_then(GuestType::parse_lenient);
        }

        if let Some(guest_group) = request.guest_group {
            let guest_group = normalize_text(guest_group);
            if let Some(group_name) = &guest_group {
                self.ctx.group_repo().ensure_exists(group_name).await?;
            }
            guest.guest_group = guest_group;
        }

        self.ctx.guest_repo().update(&guest).await?;

        info!(guest_id = guest.id, "Guest updated");

        Ok(GuestResponse::from(guest))
    }

    /// Delete a guest
    #[instrument(skip(self))]
    pub async fn delete_guest(&self, id: i64) -> ServiceResult<()> {
        self.ctx.guest_repo().delete(id).await?;

        info!(guest_id = id, "Guest deleted");

        Ok(())
    }

    /// Export guests matching the filter, up to the hard cap, in the same
    /// order as the listing. Zero rows is a valid result.
    #[instrument(skip(self))]
    pub async fn export_guests(
        &self,
        filter: &GuestFilter,
    ) -> ServiceResult<ApiResponse<Vec<GuestResponse>>> {
        let guests = self.ctx.guest_repo().list(filter, EXPORT_LIMIT, 0).await?;

        Ok(ApiResponse::new(
            guests.iter().map(GuestResponse::from).collect(),
        ))
    }
}
