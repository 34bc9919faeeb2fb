//! Route definitions
//!
//! All API routes are mounted at the root, matching the public contract.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{groups, guests, health};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().merge(guest_routes()).merge(group_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Guest routes
fn guest_routes() -> Router<AppState> {
    Router::new()
        .route("/guests", get(guests::list_guests))
        .route("/guests", post(guests::create_guest))
        // Static segment must be declared alongside the capture; axum
        // prefers it at match time
        .route("/guests/export", get(guests::export_guests))
        .route("/guests/:id", get(guests::get_guest))
        .route("/guests/:id", put(guests::update_guest))
        .route("/guests/:id", delete(guests::delete_guest))
}

/// Guest group routes
fn group_routes() -> Router<AppState> {
    Router::new()
        .route("/guest-groups", get(groups::list_groups))
        .route("/guest-groups", post(groups::create_group))
        .route("/guest-groups/:id", put(groups::rename_group))
        .route("/guest-groups/:id", delete(groups::delete_group))
}
