//! Database models - SQLx-compatible structs for PostgreSQL tables

mod audit_log;
mod bot;
mod user;

pub use audit_log::AuditLogModel;
pub use bot::{BotModel, RunModel, ScheduleModel};
pub use user::UserModel;
