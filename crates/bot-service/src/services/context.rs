//! Service context - dependency container for services
//!
//! Holds all repositories and the token/password services needed by services.

use std::sync::Arc;

use bot_common::auth::{JwtService, PasswordService};
use bot_core::traits::{
    AuditLogRepository, BotRepository, RunRepository, ScheduleRepository, UserRepository,
};
use bot_db::{
    MemoryStore, PgAuditLogRepository, PgBotRepository, PgPool, PgRunRepository,
    PgScheduleRepository, PgUserRepository,
};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Repositories (PostgreSQL or in-memory)
/// - JWT service for authentication
/// - Password hashing
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    bot_repo: Arc<dyn BotRepository>,
    audit_repo: Arc<dyn AuditLogRepository>,
    schedule_repo: Arc<dyn ScheduleRepository>,
    run_repo: Arc<dyn RunRepository>,

    // Services
    jwt_service: Arc<JwtService>,
    password_service: PasswordService,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        bot_repo: Arc<dyn BotRepository>,
        audit_repo: Arc<dyn AuditLogRepository>,
        schedule_repo: Arc<dyn ScheduleRepository>,
        run_repo: Arc<dyn RunRepository>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            user_repo,
            bot_repo,
            audit_repo,
            schedule_repo,
            run_repo,
            jwt_service,
            password_service: PasswordService::new(),
        }
    }

    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the bot repository
    pub fn bot_repo(&self) -> &dyn BotRepository {
        self.bot_repo.as_ref()
    }

    /// Get the audit log repository
    pub fn audit_repo(&self) -> &dyn AuditLogRepository {
        self.audit_repo.as_ref()
    }

    /// Get the schedule repository
    pub fn schedule_repo(&self) -> &dyn ScheduleRepository {
        self.schedule_repo.as_ref()
    }

    /// Get the run repository
    pub fn run_repo(&self) -> &dyn RunRepository {
        self.run_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the password service
    pub fn password_service(&self) -> &PasswordService {
        &self.password_service
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("jwt_service", &"JwtService")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    bot_repo: Option<Arc<dyn BotRepository>>,
    audit_repo: Option<Arc<dyn AuditLogRepository>>,
    schedule_repo: Option<Arc<dyn ScheduleRepository>>,
    run_repo: Option<Arc<dyn RunRepository>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            user_repo: None,
            bot_repo: None,
            audit_repo: None,
            schedule_repo: None,
            run_repo: None,
            jwt_service: None,
        }
    }

    /// Use the PostgreSQL repositories for every store
    pub fn postgres(self, pool: &PgPool) -> Self {
        self.user_repo(Arc::new(PgUserRepository::new(pool.clone())))
            .bot_repo(Arc::new(PgBotRepository::new(pool.clone())))
            .audit_repo(Arc::new(PgAuditLogRepository::new(pool.clone())))
            .schedule_repo(Arc::new(PgScheduleRepository::new(pool.clone())))
            .run_repo(Arc::new(PgRunRepository::new(pool.clone())))
    }

    /// Back every store with one shared in-memory store
    pub fn memory(self, store: &MemoryStore) -> Self {
        self.user_repo(Arc::new(store.clone()))
            .bot_repo(Arc::new(store.clone()))
            .audit_repo(Arc::new(store.clone()))
            .schedule_repo(Arc::new(store.clone()))
            .run_repo(Arc::new(store.clone()))
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn bot_repo(mut self, repo: Arc<dyn BotRepository>) -> Self {
        self.bot_repo = Some(repo);
        self
    }

    pub fn audit_repo(mut self, repo: Arc<dyn AuditLogRepository>) -> Self {
        self.audit_repo = Some(repo);
        self
    }

    pub fn schedule_repo(mut self, repo: Arc<dyn ScheduleRepository>) -> Self {
        self.schedule_repo = Some(repo);
        self
    }

    pub fn run_repo(mut self, repo: Arc<dyn RunRepository>) -> Self {
        self.run_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.user_repo.ok_or_else(|| ServiceError::internal("user_repo is required"))?,
            self.bot_repo.ok_or_else(|| ServiceError::internal("bot_repo is required"))?,
            self.audit_repo.ok_or_else(|| ServiceError::internal("audit_repo is required"))?,
            self.schedule_repo.ok_or_else(|| ServiceError::internal("schedule_repo is required"))?,
            self.run_repo.ok_or_else(|| ServiceError::internal("run_repo is required"))?,
            self.jwt_service.ok_or_else(|| ServiceError::internal("jwt_service is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_requires_jwt_service() {
        let store = MemoryStore::new();
        let err = ServiceContext::builder().memory(&store).build().unwrap_err();
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_build_with_memory_store() {
        let store = MemoryStore::new();
        let ctx = ServiceContext::builder()
            .memory(&store)
            .jwt_service(Arc::new(JwtService::new("secret", 60, 60)))
            .build();
        assert!(ctx.is_ok());
    }
}
