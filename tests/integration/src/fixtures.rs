//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test User {suffix}"),
            email: format!("test{suffix}@example.com"),
            password: "TestPass123!".to_string(),
            role: None,
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}

/// Token response
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Create bot request
#[derive(Debug, Serialize)]
pub struct CreateBotRequest {
    pub name: String,
    pub description: String,
    pub version: String,
    pub config: Value,
}

impl CreateBotRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test Bot {suffix}"),
            description: "A test bot".to_string(),
            version: "1.0.0".to_string(),
            config: serde_json::json!({"target_url": "https://example.com", "timeout": 30}),
        }
    }
}

/// Bot response
#[derive(Debug, Deserialize)]
pub struct BotResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub version: String,
    pub config: Value,
    pub status: String,
}

/// Lifecycle / deploy response
#[derive(Debug, Deserialize)]
pub struct BotActionResponse {
    pub message: String,
    pub bot: BotResponse,
}

/// Status projection
#[derive(Debug, Deserialize)]
pub struct BotStatusResponse {
    pub id: i64,
    pub name: String,
    pub status: String,
    pub version: String,
}

/// Schedule response
#[derive(Debug, Deserialize)]
pub struct ScheduleResponse {
    pub id: i64,
    pub bot_id: i64,
    pub cron_expression: String,
    pub is_active: bool,
}

/// Run response
#[derive(Debug, Deserialize)]
pub struct RunResponse {
    pub id: i64,
    pub bot_id: i64,
    pub success: Option<bool>,
    pub log: String,
}

/// Audit entry
#[derive(Debug, Deserialize)]
pub struct AuditLogResponse {
    pub id: i64,
    pub user_id: Option<i64>,
    pub action: String,
    pub details: Value,
    pub user: Option<UserResponse>,
}

/// Plain message body
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error envelope
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
