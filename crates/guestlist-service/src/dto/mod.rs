//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs
//!
//! The wire format is camelCase JSON throughout.

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    CreateGroupRequest, CreateGuestRequest, RenameGroupRequest, UpdateGuestRequest,
};

// Re-export commonly used response types
pub use responses::{
    ApiResponse, GroupResponse, GroupWithCountResponse, GuestListResponse, GuestResponse,
    HealthResponse, ReadinessResponse,
};
