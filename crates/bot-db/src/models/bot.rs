//! Bot, schedule and run database models

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use sqlx::FromRow;

/// Database model for bots table
#[derive(Debug, Clone, FromRow)]
pub struct BotModel {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub version: String,
    pub config: JsonValue,
    /// `stopped` or `running`, enforced by a CHECK constraint
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for schedules table
#[derive(Debug, Clone, FromRow)]
pub struct ScheduleModel {
    pub id: i64,
    pub bot_id: i64,
    pub cron_expression: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for runs table
#[derive(Debug, Clone, FromRow)]
pub struct RunModel {
    pub id: i64,
    pub bot_id: i64,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub success: Option<bool>,
    pub log: String,
    pub metrics: JsonValue,
    pub created_at: DateTime<Utc>,
}
