//! PostgreSQL implementation of AuditLogRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use bot_core::entities::{AuditLog, AuditQuery, NewAuditLog};
use bot_core::traits::{AuditLogRepository, RepoResult};

use crate::models::AuditLogModel;

use super::error::map_db_error;

/// PostgreSQL implementation of AuditLogRepository
#[derive(Clone)]
pub struct PgAuditLogRepository {
    pool: PgPool,
}

impl PgAuditLogRepository {
    /// Create a new PgAuditLogRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditLogRepository for PgAuditLogRepository {
    #[instrument(skip(self, entry), fields(action = %entry.action, user_id = ?entry.user_id))]
    async fn create(&self, entry: &NewAuditLog) -> RepoResult<AuditLog> {
        // A purged actor would violate the FK, so it is recorded as NULL instead
        let model = sqlx::query_as::<_, AuditLogModel>(
            r"
            INSERT INTO audit_logs (user_id, action, details)
            VALUES ((SELECT id FROM users WHERE id = $1), $2, $3)
            RETURNING id, user_id, action, details, created_at
            ",
        )
        .bind(entry.user_id)
        .bind(&entry.action)
        .bind(&entry.details)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(AuditLog::from(model))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<AuditLog>> {
        let result = sqlx::query_as::<_, AuditLogModel>(
            r"
            SELECT id, user_id, action, details, created_at
            FROM audit_logs
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(AuditLog::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, query: &AuditQuery) -> RepoResult<Vec<AuditLog>> {
        let results = sqlx::query_as::<_, AuditLogModel>(
            r"
            SELECT id, user_id, action, details, created_at
            FROM audit_logs
            WHERE ($1::bigint IS NULL OR user_id = $1)
              AND ($2::varchar IS NULL OR action = $2)
            ORDER BY created_at DESC, id DESC
            LIMIT $3 OFFSET $4
            ",
        )
        .bind(query.user_id)
        .bind(query.action.as_deref())
        .bind(query.limit)
        .bind(query.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(AuditLog::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgAuditLogRepository>();
    }
}
