//! Domain events - emitted once a state-changing operation has been persisted
//!
//! These events are used for:
//! - The audit trail (every event becomes one `audit_logs` row)
//! - Operational log lines

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::entities::{Bot, Schedule};
use crate::value_objects::BotCommand;

/// All possible domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DomainEvent {
    // =========================================================================
    // Bot Events
    // =========================================================================
    BotCreated(BotEvent),
    BotUpdated(BotEvent),
    BotDeleted(BotEvent),
    BotStarted(BotEvent),
    BotStopped(BotEvent),
    BotRestarted(BotEvent),
    BotDeployed(BotDeployedEvent),

    // =========================================================================
    // Schedule Events
    // =========================================================================
    ScheduleCreated(ScheduleEvent),
    ScheduleDeleted(ScheduleEvent),

    // =========================================================================
    // User Events
    // =========================================================================
    UserDeleted(UserRemovedEvent),
    UserPurged(UserRemovedEvent),
}

impl DomainEvent {
    /// Dot-namespaced action name recorded in the audit trail
    pub fn action(&self) -> &'static str {
        match self {
            Self::BotCreated(_) => "bot.create",
            Self::BotUpdated(_) => "bot.update",
            Self::BotDeleted(_) => "bot.delete",
            Self::BotStarted(_) => "bot.start",
            Self::BotStopped(_) => "bot.stop",
            Self::BotRestarted(_) => "bot.restart",
            Self::BotDeployed(_) => "bot.deploy",
            Self::ScheduleCreated(_) => "schedule.create",
            Self::ScheduleDeleted(_) => "schedule.delete",
            Self::UserDeleted(_) => "user.delete",
            Self::UserPurged(_) => "user.purge",
        }
    }

    /// Structured details stored alongside the action
    pub fn details(&self) -> JsonValue {
        let value = match self {
            Self::BotCreated(e)
            | Self::BotUpdated(e)
            | Self::BotDeleted(e)
            | Self::BotStarted(e)
            | Self::BotStopped(e)
            | Self::BotRestarted(e) => serde_json::to_value(e),
            Self::BotDeployed(e) => serde_json::to_value(e),
            Self::ScheduleCreated(e) | Self::ScheduleDeleted(e) => serde_json::to_value(e),
            Self::UserDeleted(e) | Self::UserPurged(e) => serde_json::to_value(e),
        };
        value.unwrap_or_default()
    }

    /// Event for a lifecycle command applied to a bot
    pub fn lifecycle(command: BotCommand, bot: &Bot) -> Self {
        let event = BotEvent::from(bot);
        match command {
            BotCommand::Start => Self::BotStarted(event),
            BotCommand::Stop => Self::BotStopped(event),
            BotCommand::Restart => Self::BotRestarted(event),
        }
    }
}

// ============================================================================
// Event Structs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotEvent {
    pub bot_id: i64,
    pub bot_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotDeployedEvent {
    pub bot_id: i64,
    pub bot_name: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEvent {
    pub schedule_id: i64,
    pub bot_id: i64,
    pub cron_expression: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRemovedEvent {
    pub user_id: i64,
    pub email: String,
}

// ============================================================================
// Event Creation Helpers
// ============================================================================

impl From<&Bot> for BotEvent {
    fn from(bot: &Bot) -> Self {
        Self {
            bot_id: bot.id,
            bot_name: bot.name.clone(),
        }
    }
}

impl From<&Bot> for BotDeployedEvent {
    fn from(bot: &Bot) -> Self {
        Self {
            bot_id: bot.id,
            bot_name: bot.name.clone(),
            version: bot.version.clone(),
        }
    }
}

impl From<&Schedule> for ScheduleEvent {
    fn from(schedule: &Schedule) -> Self {
        Self {
            schedule_id: schedule.id,
            bot_id: schedule.bot_id,
            cron_expression: schedule.cron_expression.to_string(),
        }
    }
}
