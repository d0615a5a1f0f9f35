//! Value objects - immutable domain primitives

mod bot_status;
mod cron;
mod role;

pub use bot_status::{BotCommand, BotStatus};
pub use cron::CronExpression;
pub use role::Role;
