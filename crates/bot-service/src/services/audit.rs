//! Audit trail
//!
//! `AuditRecorder` turns domain events into audit rows after the change they
//! describe has been persisted. `AuditService` serves the read side.

use std::collections::{BTreeSet, HashMap};

use bot_core::entities::{AuditQuery, NewAuditLog, User};
use bot_core::events::DomainEvent;
use bot_core::DomainError;
use tracing::{debug, instrument, warn};

use crate::dto::{AuditLogQuery, AuditLogResponse, AuditLogWithUser};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Best-effort writer for the audit trail
pub struct AuditRecorder<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuditRecorder<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record `event` on behalf of `actor`
    ///
    /// Never fails: a write error is logged and swallowed so the operation
    /// that produced the event still succeeds.
    pub async fn record(&self, actor: Option<i64>, event: &DomainEvent) {
        let entry = NewAuditLog {
            user_id: actor,
            action: event.action().to_string(),
            details: event.details(),
        };

        match self.ctx.audit_repo().create(&entry).await {
            Ok(log) => debug!(audit_id = log.id, action = %log.action, "Audit entry recorded"),
            Err(e) => warn!(
                error = %e,
                action = %entry.action,
                actor = ?actor,
                "Failed to record audit entry"
            ),
        }
    }
}

/// Audit log queries
pub struct AuditService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuditService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List audit entries, newest first
    #[instrument(skip(self))]
    pub async fn list(&self, query: AuditLogQuery) -> ServiceResult<Vec<AuditLogResponse>> {
        let query = AuditQuery::from(query);
        let entries = self.ctx.audit_repo().list(&query).await?;

        let actor_ids: BTreeSet<i64> = entries.iter().filter_map(|e| e.user_id).collect();
        let mut actors: HashMap<i64, User> = HashMap::with_capacity(actor_ids.len());
        for id in actor_ids {
            if let Some(user) = self.ctx.user_repo().find_by_id(id).await? {
                actors.insert(id, user);
            }
        }

        Ok(entries
            .into_iter()
            .map(|entry| {
                let user = entry.user_id.and_then(|id| actors.get(&id).cloned());
                AuditLogResponse::from(AuditLogWithUser::new(entry, user))
            })
            .collect())
    }

    /// Get a single audit entry
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<AuditLogResponse> {
        let entry = self
            .ctx
            .audit_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::AuditLogNotFound(id))?;

        let user = match entry.user_id {
            Some(user_id) => self.ctx.user_repo().find_by_id(user_id).await?,
            None => None,
        };

        Ok(AuditLogResponse::from(AuditLogWithUser::new(entry, user)))
    }
}
