//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    AuditLogQuery, CreateBotRequest, CreateScheduleRequest, DeleteUserQuery, DeployBotRequest,
    LoginRequest, PageQuery, RegisterRequest, UpdateBotRequest,
};

pub use responses::{
    AuditLogResponse, BotActionResponse, BotResponse, BotStatusResponse, LoginResponse,
    MessageResponse, RunResponse, ScheduleResponse, TokenResponse, UserResponse,
};

pub use mappers::AuditLogWithUser;
