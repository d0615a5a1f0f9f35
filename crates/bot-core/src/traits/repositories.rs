//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation (PostgreSQL, or the in-memory store used in tests).

use async_trait::async_trait;

use crate::entities::{
    AuditLog, AuditQuery, Bot, BotPatch, NewAuditLog, NewBot, NewSchedule, NewUser, Run, Schedule,
    User,
};
use crate::error::DomainError;
use crate::value_objects::BotStatus;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find an active user by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;

    /// Find an active user by email (exact match)
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken (soft-deleted accounts included)
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Count active users
    async fn count(&self) -> RepoResult<i64>;

    /// Insert a user; fails with `EmailAlreadyExists` on a duplicate email
    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>>;

    /// Soft delete a user
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Remove the row entirely. Audit entries keep their action but lose the actor.
    async fn purge(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Bot Repository
// ============================================================================

#[async_trait]
pub trait BotRepository: Send + Sync {
    /// Find bot by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Bot>>;

    /// List all bots, oldest first
    async fn list(&self) -> RepoResult<Vec<Bot>>;

    /// Insert a bot in the `Stopped` status
    async fn create(&self, bot: &NewBot) -> RepoResult<Bot>;

    /// Apply the fields present in `patch`; the rest keep their stored values
    async fn update(&self, id: i64, patch: &BotPatch) -> RepoResult<Bot>;

    /// Soft delete a bot
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Set the status, optionally only if the current status equals `expected`.
    ///
    /// Returns `None` when no row matched (missing bot or status mismatch).
    async fn set_status(
        &self,
        id: i64,
        next: BotStatus,
        expected: Option<BotStatus>,
    ) -> RepoResult<Option<Bot>>;

    /// Replace the version string without touching the status
    async fn set_version(&self, id: i64, version: &str) -> RepoResult<Bot>;
}

// ============================================================================
// Audit Log Repository
// ============================================================================

#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    /// Append an entry
    async fn create(&self, entry: &NewAuditLog) -> RepoResult<AuditLog>;

    /// Find entry by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<AuditLog>>;

    /// List entries newest first, filtered and paged by `query`
    async fn list(&self, query: &AuditQuery) -> RepoResult<Vec<AuditLog>>;
}

// ============================================================================
// Schedule Repository
// ============================================================================

#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// Find schedule by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Schedule>>;

    /// List a bot's schedules, oldest first
    async fn find_by_bot(&self, bot_id: i64) -> RepoResult<Vec<Schedule>>;

    /// Insert a schedule
    async fn create(&self, schedule: &NewSchedule) -> RepoResult<Schedule>;

    /// Soft delete a schedule
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Run Repository
// ============================================================================

#[async_trait]
pub trait RunRepository: Send + Sync {
    /// List a bot's runs, most recent start first
    async fn find_by_bot(&self, bot_id: i64, limit: i64, offset: i64) -> RepoResult<Vec<Run>>;
}
