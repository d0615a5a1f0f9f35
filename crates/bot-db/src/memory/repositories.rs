//! Repository trait implementations for `MemoryStore`

use async_trait::async_trait;
use chrono::Utc;

use bot_core::entities::{
    AuditLog, AuditQuery, Bot, BotPatch, NewAuditLog, NewBot, NewSchedule, NewUser, Run, Schedule,
    User,
};
use bot_core::error::DomainError;
use bot_core::traits::{
    AuditLogRepository, BotRepository, RepoResult, RunRepository, ScheduleRepository,
    UserRepository,
};
use bot_core::value_objects::BotStatus;

use super::{MemoryStore, Row, UserRow};

/// Apply `LIMIT/OFFSET` to an already ordered iterator
fn page<T>(items: impl Iterator<Item = T>, limit: i64, offset: i64) -> Vec<T> {
    let offset = usize::try_from(offset).unwrap_or(0);
    let limit = usize::try_from(limit).unwrap_or(0);
    items.skip(offset).take(limit).collect()
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        let tables = self.tables.read();
        Ok(tables
            .users
            .get(&id)
            .filter(|row| !row.deleted)
            .map(|row| row.user.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let tables = self.tables.read();
        Ok(tables
            .users
            .values()
            .find(|row| !row.deleted && row.user.email == email)
            .map(|row| row.user.clone()))
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        let tables = self.tables.read();
        Ok(tables.users.values().any(|row| row.user.email == email))
    }

    async fn count(&self) -> RepoResult<i64> {
        let tables = self.tables.read();
        Ok(tables.users.values().filter(|row| !row.deleted).count() as i64)
    }

    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User> {
        let mut tables = self.tables.write();
        if tables.users.values().any(|row| row.user.email == user.email) {
            return Err(DomainError::EmailAlreadyExists);
        }

        let now = Utc::now();
        let created = User {
            id: tables.next_id(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            created_at: now,
            updated_at: now,
        };
        tables.users.insert(
            created.id,
            UserRow {
                user: created.clone(),
                password_hash: password_hash.to_string(),
                deleted: false,
            },
        );
        Ok(created)
    }

    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>> {
        let tables = self.tables.read();
        Ok(tables
            .users
            .get(&id)
            .filter(|row| !row.deleted)
            .map(|row| row.password_hash.clone()))
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut tables = self.tables.write();
        match tables.users.get_mut(&id) {
            Some(row) if !row.deleted => {
                row.deleted = true;
                row.user.updated_at = Utc::now();
                Ok(())
            }
            _ => Err(DomainError::UserNotFound(id)),
        }
    }

    async fn purge(&self, id: i64) -> RepoResult<()> {
        let mut tables = self.tables.write();
        if tables.users.remove(&id).is_none() {
            return Err(DomainError::UserNotFound(id));
        }
        for entry in tables.audit_logs.values_mut() {
            if entry.user_id == Some(id) {
                entry.user_id = None;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl BotRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Bot>> {
        Ok(self.tables.read().live_bot(id).cloned())
    }

    async fn list(&self) -> RepoResult<Vec<Bot>> {
        let tables = self.tables.read();
        Ok(tables
            .bots
            .values()
            .filter(|row| !row.deleted)
            .map(|row| row.value.clone())
            .collect())
    }

    async fn create(&self, bot: &NewBot) -> RepoResult<Bot> {
        let mut tables = self.tables.write();
        let now = Utc::now();
        let created = Bot {
            id: tables.next_id(),
            name: bot.name.clone(),
            description: bot.description.clone(),
            version: bot.version.clone(),
            config: bot.config.clone(),
            status: BotStatus::Stopped,
            created_at: now,
            updated_at: now,
        };
        tables.bots.insert(created.id, Row::live(created.clone()));
        Ok(created)
    }

    async fn update(&self, id: i64, patch: &BotPatch) -> RepoResult<Bot> {
        let mut tables = self.tables.write();
        let row = tables
            .bots
            .get_mut(&id)
            .filter(|row| !row.deleted)
            .ok_or(DomainError::BotNotFound(id))?;

        patch.clone().apply_to(&mut row.value);
        Ok(row.value.clone())
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut tables = self.tables.write();
        match tables.bots.get_mut(&id) {
            Some(row) if !row.deleted => {
                row.deleted = true;
                Ok(())
            }
            _ => Err(DomainError::BotNotFound(id)),
        }
    }

    async fn set_status(
        &self,
        id: i64,
        next: BotStatus,
        expected: Option<BotStatus>,
    ) -> RepoResult<Option<Bot>> {
        let mut tables = self.tables.write();
        let Some(row) = tables.bots.get_mut(&id).filter(|row| !row.deleted) else {
            return Ok(None);
        };
        if expected.is_some_and(|status| status != row.value.status) {
            return Ok(None);
        }

        row.value.status = next;
        row.value.updated_at = Utc::now();
        Ok(Some(row.value.clone()))
    }

    async fn set_version(&self, id: i64, version: &str) -> RepoResult<Bot> {
        let mut tables = self.tables.write();
        let row = tables
            .bots
            .get_mut(&id)
            .filter(|row| !row.deleted)
            .ok_or(DomainError::BotNotFound(id))?;

        row.value.version = version.to_string();
        row.value.updated_at = Utc::now();
        Ok(row.value.clone())
    }
}

#[async_trait]
impl AuditLogRepository for MemoryStore {
    async fn create(&self, entry: &NewAuditLog) -> RepoResult<AuditLog> {
        let mut tables = self.tables.write();
        let user_id = entry.user_id.filter(|id| tables.users.contains_key(id));
        let created = AuditLog {
            id: tables.next_id(),
            user_id,
            action: entry.action.clone(),
            details: entry.details.clone(),
            created_at: Utc::now(),
        };
        tables.audit_logs.insert(created.id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<AuditLog>> {
        Ok(self.tables.read().audit_logs.get(&id).cloned())
    }

    async fn list(&self, query: &AuditQuery) -> RepoResult<Vec<AuditLog>> {
        let tables = self.tables.read();
        let mut entries: Vec<&AuditLog> = tables
            .audit_logs
            .values()
            .filter(|e| query.user_id.map_or(true, |id| e.user_id == Some(id)))
            .filter(|e| query.action.as_ref().map_or(true, |a| &e.action == a))
            .collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        Ok(page(entries.into_iter().cloned(), query.limit, query.offset))
    }
}

#[async_trait]
impl ScheduleRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Schedule>> {
        let tables = self.tables.read();
        Ok(tables
            .schedules
            .get(&id)
            .filter(|row| !row.deleted)
            .map(|row| row.value.clone()))
    }

    async fn find_by_bot(&self, bot_id: i64) -> RepoResult<Vec<Schedule>> {
        let tables = self.tables.read();
        Ok(tables
            .schedules
            .values()
            .filter(|row| !row.deleted && row.value.bot_id == bot_id)
            .map(|row| row.value.clone())
            .collect())
    }

    async fn create(&self, schedule: &NewSchedule) -> RepoResult<Schedule> {
        let mut tables = self.tables.write();
        if !tables.bots.contains_key(&schedule.bot_id) {
            return Err(DomainError::BotNotFound(schedule.bot_id));
        }

        let now = Utc::now();
        let created = Schedule {
            id: tables.next_id(),
            bot_id: schedule.bot_id,
            cron_expression: schedule.cron_expression.clone(),
            is_active: schedule.is_active,
            created_at: now,
            updated_at: now,
        };
        tables.schedules.insert(created.id, Row::live(created.clone()));
        Ok(created)
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut tables = self.tables.write();
        match tables.schedules.get_mut(&id) {
            Some(row) if !row.deleted => {
                row.deleted = true;
                row.value.updated_at = Utc::now();
                Ok(())
            }
            _ => Err(DomainError::ScheduleNotFound(id)),
        }
    }
}

#[async_trait]
impl RunRepository for MemoryStore {
    async fn find_by_bot(&self, bot_id: i64, limit: i64, offset: i64) -> RepoResult<Vec<Run>> {
        let tables = self.tables.read();
        let mut runs: Vec<&Run> = tables.runs.values().filter(|r| r.bot_id == bot_id).collect();
        runs.sort_by(|a, b| b.started_at.cmp(&a.started_at).then(b.id.cmp(&a.id)));

        Ok(page(runs.into_iter().cloned(), limit, offset))
    }
}
