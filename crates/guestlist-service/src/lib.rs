//! # guestlist-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    ApiResponse, CreateGroupRequest, CreateGuestRequest, GroupResponse, GroupWithCountResponse,
    GuestListResponse, GuestResponse, HealthResponse, ReadinessResponse, RenameGroupRequest,
    UpdateGuestRequest,
};
pub use services::{
    GroupService, GuestService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
