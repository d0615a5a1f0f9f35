//! Audit log entity - an append-only record of a state change

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;

/// Recorded audit entry
///
/// `user_id` is `None` when the action had no known actor or the actor's
/// account has since been removed.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditLog {
    pub id: i64,
    pub user_id: Option<i64>,
    pub action: String,
    pub details: JsonValue,
    pub created_at: DateTime<Utc>,
}

/// Entry to append
#[derive(Debug, Clone, PartialEq)]
pub struct NewAuditLog {
    pub user_id: Option<i64>,
    pub action: String,
    pub details: JsonValue,
}

/// Filters and paging for audit listings (newest first)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditQuery {
    pub user_id: Option<i64>,
    pub action: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

impl AuditQuery {
    pub const DEFAULT_LIMIT: i64 = 50;
    pub const MAX_LIMIT: i64 = 100;
}

impl Default for AuditQuery {
    fn default() -> Self {
        Self {
            user_id: None,
            action: None,
            limit: Self::DEFAULT_LIMIT,
            offset: 0,
        }
    }
}
