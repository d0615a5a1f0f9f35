//! PostgreSQL implementation of BotRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use bot_core::entities::{Bot, BotPatch, NewBot};
use bot_core::traits::{BotRepository, RepoResult};
use bot_core::value_objects::BotStatus;

use crate::mappers::try_collect;
use crate::models::BotModel;

use super::error::{bot_not_found, map_db_error};

/// PostgreSQL implementation of BotRepository
#[derive(Clone)]
pub struct PgBotRepository {
    pool: PgPool,
}

impl PgBotRepository {
    /// Create a new PgBotRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BotRepository for PgBotRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Bot>> {
        let result = sqlx::query_as::<_, BotModel>(
            r"
            SELECT id, name, description, version, config, status, created_at, updated_at
            FROM bots
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Bot::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Bot>> {
        let results = sqlx::query_as::<_, BotModel>(
            r"
            SELECT id, name, description, version, config, status, created_at, updated_at
            FROM bots
            WHERE deleted_at IS NULL
            ORDER BY id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        try_collect(results)
    }

    #[instrument(skip(self, bot), fields(name = %bot.name))]
    async fn create(&self, bot: &NewBot) -> RepoResult<Bot> {
        let model = sqlx::query_as::<_, BotModel>(
            r"
            INSERT INTO bots (name, description, version, config, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, version, config, status, created_at, updated_at
            ",
        )
        .bind(&bot.name)
        .bind(&bot.description)
        .bind(&bot.version)
        .bind(&bot.config)
        .bind(BotStatus::Stopped.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Bot::try_from(model)
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: i64, patch: &BotPatch) -> RepoResult<Bot> {
        let model = sqlx::query_as::<_, BotModel>(
            r"
            UPDATE bots
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                version = COALESCE($4, version),
                config = COALESCE($5, config),
                updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING id, name, description, version, config, status, created_at, updated_at
            ",
        )
        .bind(id)
        .bind(patch.name.as_deref())
        .bind(patch.description.as_deref())
        .bind(patch.version.as_deref())
        .bind(patch.config.as_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| bot_not_found(id))?;

        Bot::try_from(model)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE bots
            SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(bot_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_status(
        &self,
        id: i64,
        next: BotStatus,
        expected: Option<BotStatus>,
    ) -> RepoResult<Option<Bot>> {
        let result = sqlx::query_as::<_, BotModel>(
            r"
            UPDATE bots
            SET status = $2, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
              AND ($3::varchar IS NULL OR status = $3)
            RETURNING id, name, description, version, config, status, created_at, updated_at
            ",
        )
        .bind(id)
        .bind(next.as_str())
        .bind(expected.map(BotStatus::as_str))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Bot::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn set_version(&self, id: i64, version: &str) -> RepoResult<Bot> {
        let model = sqlx::query_as::<_, BotModel>(
            r"
            UPDATE bots
            SET version = $2, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING id, name, description, version, config, status, created_at, updated_at
            ",
        )
        .bind(id)
        .bind(version)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| bot_not_found(id))?;

        Bot::try_from(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgBotRepository>();
    }
}
