//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Identifiers are plain JSON numbers.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value as JsonValue;

use bot_core::value_objects::{BotStatus, Role};

// ============================================================================
// Common Response Types
// ============================================================================

/// Bare acknowledgement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// User / Auth Response Types
// ============================================================================

/// Public profile of an operator account
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Successful login
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}

/// Freshly issued token
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

// ============================================================================
// Bot Response Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BotResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub version: String,
    pub config: JsonValue,
    pub status: BotStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Result of a lifecycle or deploy command
#[derive(Debug, Clone, Serialize)]
pub struct BotActionResponse {
    pub message: String,
    pub bot: BotResponse,
}

impl BotActionResponse {
    pub fn new(message: impl Into<String>, bot: impl Into<BotResponse>) -> Self {
        Self {
            message: message.into(),
            bot: bot.into(),
        }
    }
}

/// Status projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BotStatusResponse {
    pub id: i64,
    pub name: String,
    pub status: BotStatus,
    pub version: String,
}

// ============================================================================
// Schedule / Run Response Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleResponse {
    pub id: i64,
    pub bot_id: i64,
    pub cron_expression: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResponse {
    pub id: i64,
    pub bot_id: i64,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub success: Option<bool>,
    pub log: String,
    pub metrics: JsonValue,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Audit Response Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditLogResponse {
    pub id: i64,
    pub user_id: Option<i64>,
    pub action: String,
    pub details: JsonValue,
    pub created_at: DateTime<Utc>,
    /// Actor profile, omitted once the actor is gone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
}
