//! Guest listing and export query extractors
//!
//! Parses the loosely-typed filter parameters into a typed query. Parsing
//! is lenient by contract: unparseable page/limit values fall back to
//! defaults, and invalid enum values mean "do not filter on this field"
//! rather than an error.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use guestlist_core::traits::GuestFilter;
use guestlist_core::value_objects::{GuestType, InvitationType};
use serde::Deserialize;

use crate::response::ApiError;

/// Default page size
const DEFAULT_LIMIT: i64 = 15;
/// Maximum page size
const MAX_LIMIT: i64 = 100;

/// Raw guest listing query parameters
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestListParams {
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub invitation_type: Option<String>,
    #[serde(default)]
    pub guest_type: Option<String>,
    #[serde(default)]
    pub guest_group: Option<String>,
}

/// Validated guest listing query
#[derive(Debug, Clone)]
pub struct GuestListQuery {
    /// 1-based page number
    pub page: i64,
    /// Page size, 1..=100
    pub limit: i64,
    /// Typed filter parameters
    pub filter: GuestFilter,
}

impl Default for GuestListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
            filter: GuestFilter::default(),
        }
    }
}

fn parse_page(value: Option<&str>) -> i64 {
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|n| *n >= 1)
        .unwrap_or(1)
}

fn parse_limit(value: Option<&str>) -> i64 {
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|n| *n >= 1)
        .map(|n| n.min(MAX_LIMIT))
        .unwrap_or(DEFAULT_LIMIT)
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn build_filter(
    search: Option<String>,
    location: Option<String>,
    invitation_type: Option<String>,
    guest_type: Option<String>,
    guest_group: Option<String>,
) -> GuestFilter {
    GuestFilter {
        search: trimmed(search),
        location: trimmed(location),
        // An invalid enum value is equivalent to not filtering at all
        invitation_type: trimmed(invitation_type)
            .as_deref()
            .and_then(InvitationType::parse_lenient),
        guest_type: trimmed(guest_type).as_deref().and_then(GuestType::parse_lenient),
        group: trimmed(guest_group),
    }
}

impl From<GuestListParams> for GuestListQuery {
    fn from(params: GuestListParams) -> Self {
        Self {
            page: parse_page(params.page.as_deref()),
            limit: parse_limit(params.limit.as_deref()),
            filter: build_filter(
                params.search,
                params.location,
                params.invitation_type,
                params.guest_type,
                params.guest_group,
            ),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for GuestListQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<GuestListParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Ok(GuestListQuery::from(params))
    }
}

/// Raw export query parameters (same filters as the listing, no paging)
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportParams {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub invitation_type: Option<String>,
    #[serde(default)]
    pub guest_type: Option<String>,
    #[serde(default)]
    pub guest_group: Option<String>,
}

/// Validated export query
#[derive(Debug, Clone, Default)]
pub struct ExportQuery {
    pub filter: GuestFilter,
}

impl From<ExportParams> for ExportQuery {
    fn from(params: ExportParams) -> Self {
        Self {
            filter: build_filter(
                params.search,
                params.location,
                params.invitation_type,
                params.guest_type,
                params.guest_group,
            ),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ExportQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<ExportParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Ok(ExportQuery::from(params))
    }
}
