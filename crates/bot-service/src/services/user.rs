//! User service
//!
//! Account removal. Profiles are read through `AuthService::me`.

use bot_core::events::{DomainEvent, UserRemovedEvent};
use bot_core::DomainError;
use tracing::{info, instrument};

use crate::dto::MessageResponse;

use super::audit::AuditRecorder;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Remove an account
    ///
    /// `purge = false` tombstones the row; `purge = true` removes it and
    /// leaves the account's audit entries behind with a null actor.
    #[instrument(skip(self))]
    pub async fn delete(&self, actor: i64, user_id: i64, purge: bool) -> ServiceResult<MessageResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(user_id))?;

        let payload = UserRemovedEvent {
            user_id: user.id,
            email: user.email,
        };

        let event = if purge {
            self.ctx.user_repo().purge(user_id).await?;
            DomainEvent::UserPurged(payload)
        } else {
            self.ctx.user_repo().delete(user_id).await?;
            DomainEvent::UserDeleted(payload)
        };

        info!(user_id, purge, "User removed");
        AuditRecorder::new(self.ctx).record(Some(actor), &event).await;

        Ok(MessageResponse::new("User deleted successfully"))
    }
}
