//! # bot-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AuditRecorder, AuditService, AuthService, BotService, RunService, ScheduleService,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, UserService,
};
