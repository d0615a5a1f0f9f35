//! Schedule entity - a stored cron trigger for a bot

use chrono::{DateTime, Utc};

use crate::value_objects::CronExpression;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub id: i64,
    pub bot_id: i64,
    pub cron_expression: CronExpression,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSchedule {
    pub bot_id: i64,
    pub cron_expression: CronExpression,
    pub is_active: bool,
}
