//! In-memory implementation of every repository trait
//!
//! Backs unit tests, the HTTP integration suite and local experiments without
//! PostgreSQL. It mirrors the relational behaviour the services rely on:
//! soft deletes, the unique email index, and `ON DELETE SET NULL` for
//! audit actors.

mod repositories;

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde_json::Value as JsonValue;

use bot_core::entities::{AuditLog, Bot, Run, Schedule, User};

#[derive(Debug, Clone)]
struct UserRow {
    user: User,
    password_hash: String,
    deleted: bool,
}

#[derive(Debug, Clone)]
struct Row<T> {
    value: T,
    deleted: bool,
}

impl<T> Row<T> {
    fn live(value: T) -> Self {
        Self {
            value,
            deleted: false,
        }
    }
}

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<i64, UserRow>,
    bots: BTreeMap<i64, Row<Bot>>,
    schedules: BTreeMap<i64, Row<Schedule>>,
    runs: BTreeMap<i64, Run>,
    audit_logs: BTreeMap<i64, AuditLog>,
    last_id: i64,
}

impl Tables {
    /// Shared sequence; ids only need to be unique and increasing
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    fn live_bot(&self, id: i64) -> Option<&Bot> {
        self.bots
            .get(&id)
            .filter(|row| !row.deleted)
            .map(|row| &row.value)
    }
}

/// Thread-safe in-memory store; clones share the same tables
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished or in-progress run for a bot
    ///
    /// Runs are reported by external runners, so no repository trait creates them.
    pub fn insert_run(
        &self,
        bot_id: i64,
        started_at: DateTime<Utc>,
        finished_at: Option<DateTime<Utc>>,
        success: Option<bool>,
        log: &str,
        metrics: JsonValue,
    ) -> Run {
        let mut tables = self.tables.write();
        let run = Run {
            id: tables.next_id(),
            bot_id,
            started_at,
            finished_at,
            success,
            log: log.to_string(),
            metrics,
            created_at: Utc::now(),
        };
        tables.runs.insert(run.id, run.clone());
        run
    }
}
