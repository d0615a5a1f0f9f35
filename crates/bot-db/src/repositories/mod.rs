//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in bot-core.

mod audit_log;
mod bot;
mod error;
mod schedule;
mod user;

pub use audit_log::PgAuditLogRepository;
pub use bot::PgBotRepository;
pub use schedule::{PgRunRepository, PgScheduleRepository};
pub use user::PgUserRepository;
