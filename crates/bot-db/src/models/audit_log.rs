//! Audit log database model

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use sqlx::FromRow;

/// Database model for audit_logs table
#[derive(Debug, Clone, FromRow)]
pub struct AuditLogModel {
    pub id: i64,
    /// NULL once the acting user has been purged
    pub user_id: Option<i64>,
    pub action: String,
    pub details: JsonValue,
    pub created_at: DateTime<Utc>,
}
