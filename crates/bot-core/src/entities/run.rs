//! Run entity - historical execution record reported by an external runner

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;

#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub id: i64,
    pub bot_id: i64,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub success: Option<bool>,
    pub log: String,
    pub metrics: JsonValue,
    pub created_at: DateTime<Utc>,
}

impl Run {
    /// A run without a finish time is still in progress
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished_at.is_some()
    }
}
