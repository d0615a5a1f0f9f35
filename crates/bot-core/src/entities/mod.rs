//! Domain entities - core business objects

mod audit_log;
mod bot;
mod run;
mod schedule;
mod user;

pub use audit_log::{AuditLog, AuditQuery, NewAuditLog};
pub use bot::{Bot, BotPatch, BotStatusView, NewBot};
pub use run::Run;
pub use schedule::{NewSchedule, Schedule};
pub use user::{NewUser, User};
