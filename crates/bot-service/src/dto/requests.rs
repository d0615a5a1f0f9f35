//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use serde_json::Value as JsonValue;
use validator::Validate;

use bot_core::entities::{AuditQuery, BotPatch, NewBot};

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "name is required (at most 100 characters)"))]
    #[serde(default)]
    pub name: String,

    #[validate(length(min = 1, max = 255, message = "email is required (at most 255 characters)"))]
    #[serde(default)]
    pub email: String,

    #[validate(length(min = 1, max = 128, message = "password is required (at most 128 characters)"))]
    #[serde(default)]
    pub password: String,

    /// `admin` or `viewer`; anything else registers a viewer
    pub role: Option<String>,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "email is required"))]
    #[serde(default)]
    pub email: String,

    #[validate(length(min = 1, message = "password is required"))]
    #[serde(default)]
    pub password: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Query for `DELETE /users/:id`
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct DeleteUserQuery {
    /// Remove the row instead of tombstoning it
    #[serde(default)]
    pub purge: bool,
}

// ============================================================================
// Bot Requests
// ============================================================================

/// Create bot request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBotRequest {
    #[validate(length(min = 1, max = 100, message = "name is required (at most 100 characters)"))]
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[validate(length(max = 50, message = "version must be at most 50 characters"))]
    #[serde(default)]
    pub version: String,

    /// Opaque configuration document, stored verbatim
    #[serde(default)]
    pub config: JsonValue,
}

impl From<CreateBotRequest> for NewBot {
    fn from(request: CreateBotRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            version: request.version,
            config: request.config,
        }
    }
}

/// Partial bot update: absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateBotRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: Option<String>,

    pub description: Option<String>,

    #[validate(length(max = 50, message = "version must be at most 50 characters"))]
    pub version: Option<String>,

    pub config: Option<JsonValue>,
}

impl From<UpdateBotRequest> for BotPatch {
    fn from(request: UpdateBotRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            version: request.version,
            config: request.config,
        }
    }
}

/// Deploy a new version
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DeployBotRequest {
    #[validate(length(min = 1, max = 50, message = "version is required (at most 50 characters)"))]
    #[serde(default)]
    pub version: String,
}

// ============================================================================
// Schedule Requests
// ============================================================================

/// Attach a cron schedule to a bot
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateScheduleRequest {
    #[validate(length(min = 1, max = 100, message = "cron_expression is required"))]
    #[serde(default)]
    pub cron_expression: String,

    /// Defaults to active
    pub is_active: Option<bool>,
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Offset pagination for run history
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PageQuery {
    pub const DEFAULT_LIMIT: i64 = 50;
    pub const MAX_LIMIT: i64 = 100;

    /// `(limit, offset)` clamped to `1..=100` and `>= 0`
    pub fn resolve(self) -> (i64, i64) {
        (
            clamp_limit(self.limit, Self::DEFAULT_LIMIT, Self::MAX_LIMIT),
            self.offset.unwrap_or(0).max(0),
        )
    }
}

/// Filters for `GET /audit`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditLogQuery {
    pub user_id: Option<i64>,
    pub action: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl From<AuditLogQuery> for AuditQuery {
    fn from(query: AuditLogQuery) -> Self {
        Self {
            user_id: query.user_id,
            action: query.action.filter(|a| !a.is_empty()),
            limit: clamp_limit(query.limit, AuditQuery::DEFAULT_LIMIT, AuditQuery::MAX_LIMIT),
            offset: query.offset.unwrap_or(0).max(0),
        }
    }
}

fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).clamp(1, max)
}
