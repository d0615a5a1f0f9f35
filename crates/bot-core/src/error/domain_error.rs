//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::BotStatus;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(i64),

    #[error("Bot not found: {0}")]
    BotNotFound(i64),

    #[error("Audit log not found: {0}")]
    AuditLogNotFound(i64),

    #[error("Schedule not found: {0}")]
    ScheduleNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid cron expression: {0:?} (expected 5 fields)")]
    InvalidCron(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already exists")]
    EmailAlreadyExists,

    /// A lifecycle command was refused by the status transition table
    #[error("Cannot {command} bot: already {current}")]
    InvalidTransition {
        command: &'static str,
        current: BotStatus,
    },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::BotNotFound(_) => "UNKNOWN_BOT",
            Self::AuditLogNotFound(_) => "UNKNOWN_AUDIT_LOG",
            Self::ScheduleNotFound(_) => "UNKNOWN_SCHEDULE",

            // Validation
            Self::MissingField(_) => "MISSING_FIELD",
            Self::InvalidCron(_) => "INVALID_CRON_EXPRESSION",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::InvalidTransition { .. } => "INVALID_STATUS_TRANSITION",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::BotNotFound(_)
                | Self::AuditLogNotFound(_)
                | Self::ScheduleNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingField(_) | Self::InvalidCron(_))
    }

    /// Check if this is a uniqueness conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists)
    }

    /// Check if this is a rejected status transition
    ///
    /// Reported to clients as a bad request rather than 409: the caller asked
    /// for a state the bot is already in.
    pub fn is_state_conflict(&self) -> bool {
        matches!(self, Self::InvalidTransition { .. })
    }
}
