//! Entity to DTO mappers
//!
//! Conversions from domain entities to response DTOs.

use bot_core::entities::{AuditLog, Bot, BotStatusView, Run, Schedule, User};

use super::responses::{
    AuditLogResponse, BotResponse, BotStatusResponse, RunResponse, ScheduleResponse, UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

// ============================================================================
// Bot Mappers
// ============================================================================

impl From<Bot> for BotResponse {
    fn from(bot: Bot) -> Self {
        Self {
            id: bot.id,
            name: bot.name,
            description: bot.description,
            version: bot.version,
            config: bot.config,
            status: bot.status,
            created_at: bot.created_at,
            updated_at: bot.updated_at,
        }
    }
}

impl From<BotStatusView> for BotStatusResponse {
    fn from(view: BotStatusView) -> Self {
        Self {
            id: view.id,
            name: view.name,
            status: view.status,
            version: view.version,
        }
    }
}

// ============================================================================
// Schedule / Run Mappers
// ============================================================================

impl From<Schedule> for ScheduleResponse {
    fn from(schedule: Schedule) -> Self {
        Self {
            id: schedule.id,
            bot_id: schedule.bot_id,
            cron_expression: schedule.cron_expression.into_inner(),
            is_active: schedule.is_active,
            created_at: schedule.created_at,
            updated_at: schedule.updated_at,
        }
    }
}

impl From<Run> for RunResponse {
    fn from(run: Run) -> Self {
        Self {
            id: run.id,
            bot_id: run.bot_id,
            started_at: run.started_at,
            finished_at: run.finished_at,
            success: run.success,
            log: run.log,
            metrics: run.metrics,
            created_at: run.created_at,
        }
    }
}

// ============================================================================
// Audit Mappers
// ============================================================================

/// Audit entry together with its actor, if the actor still exists
#[derive(Debug, Clone)]
pub struct AuditLogWithUser {
    pub entry: AuditLog,
    pub user: Option<User>,
}

impl AuditLogWithUser {
    pub fn new(entry: AuditLog, user: Option<User>) -> Self {
        Self { entry, user }
    }
}

impl From<AuditLogWithUser> for AuditLogResponse {
    fn from(item: AuditLogWithUser) -> Self {
        let AuditLogWithUser { entry, user } = item;
        Self {
            id: entry.id,
            user_id: entry.user_id,
            action: entry.action,
            details: entry.details,
            created_at: entry.created_at,
            user: user.map(UserResponse::from),
        }
    }
}
