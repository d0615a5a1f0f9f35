//! # bot-core
//!
//! Domain layer containing entities, value objects, repository traits, and domain events.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod events;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    AuditLog, AuditQuery, Bot, BotPatch, BotStatusView, NewAuditLog, NewBot, NewSchedule, NewUser,
    Run, Schedule, User,
};
pub use error::DomainError;
pub use events::DomainEvent;
pub use traits::{
    AuditLogRepository, BotRepository, RepoResult, RunRepository, ScheduleRepository,
    UserRepository,
};
pub use value_objects::{BotCommand, BotStatus, CronExpression, Role};
