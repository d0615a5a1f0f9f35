//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod audit;
pub mod auth;
pub mod bot;
pub mod context;
pub mod error;
pub mod run;
pub mod schedule;
pub mod user;

#[cfg(test)]
mod test_support;

// Re-export all services for convenience
pub use audit::{AuditRecorder, AuditService};
pub use auth::AuthService;
pub use bot::BotService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use run::RunService;
pub use schedule::ScheduleService;
pub use user::UserService;
