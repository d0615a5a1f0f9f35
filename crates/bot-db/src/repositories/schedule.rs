//! PostgreSQL implementations of ScheduleRepository and RunRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use bot_core::entities::{NewSchedule, Run, Schedule};
use bot_core::traits::{RepoResult, RunRepository, ScheduleRepository};

use crate::mappers::try_collect;
use crate::models::{RunModel, ScheduleModel};

use super::error::{bot_not_found, map_db_error, map_foreign_key_violation, schedule_not_found};

/// PostgreSQL implementation of ScheduleRepository
#[derive(Clone)]
pub struct PgScheduleRepository {
    pool: PgPool,
}

impl PgScheduleRepository {
    /// Create a new PgScheduleRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScheduleRepository for PgScheduleRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Schedule>> {
        let result = sqlx::query_as::<_, ScheduleModel>(
            r"
            SELECT id, bot_id, cron_expression, is_active, created_at, updated_at
            FROM schedules
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Schedule::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_bot(&self, bot_id: i64) -> RepoResult<Vec<Schedule>> {
        let results = sqlx::query_as::<_, ScheduleModel>(
            r"
            SELECT id, bot_id, cron_expression, is_active, created_at, updated_at
            FROM schedules
            WHERE bot_id = $1 AND deleted_at IS NULL
            ORDER BY id ASC
            ",
        )
        .bind(bot_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        try_collect(results)
    }

    #[instrument(skip(self, schedule), fields(bot_id = schedule.bot_id))]
    async fn create(&self, schedule: &NewSchedule) -> RepoResult<Schedule> {
        let model = sqlx::query_as::<_, ScheduleModel>(
            r"
            INSERT INTO schedules (bot_id, cron_expression, is_active)
            VALUES ($1, $2, $3)
            RETURNING id, bot_id, cron_expression, is_active, created_at, updated_at
            ",
        )
        .bind(schedule.bot_id)
        .bind(schedule.cron_expression.as_str())
        .bind(schedule.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || bot_not_found(schedule.bot_id)))?;

        Schedule::try_from(model)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE schedules
            SET deleted_at = NOW(), updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(schedule_not_found(id));
        }

        Ok(())
    }
}

/// PostgreSQL implementation of RunRepository
#[derive(Clone)]
pub struct PgRunRepository {
    pool: PgPool,
}

impl PgRunRepository {
    /// Create a new PgRunRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RunRepository for PgRunRepository {
    #[instrument(skip(self))]
    async fn find_by_bot(&self, bot_id: i64, limit: i64, offset: i64) -> RepoResult<Vec<Run>> {
        let results = sqlx::query_as::<_, RunModel>(
            r"
            SELECT id, bot_id, started_at, finished_at, success, log, metrics, created_at
            FROM runs
            WHERE bot_id = $1 AND deleted_at IS NULL
            ORDER BY started_at DESC, id DESC
            LIMIT $2 OFFSET $3
            ",
        )
        .bind(bot_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Run::from).collect())
    }
}
