//! Bot service
//!
//! Registry operations and the lifecycle commands. Every successful mutation
//! is handed to the `AuditRecorder` once it has been persisted.

use bot_core::entities::{Bot, BotPatch, NewBot};
use bot_core::events::{BotDeployedEvent, BotEvent, DomainEvent};
use bot_core::value_objects::BotCommand;
use bot_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{
    BotActionResponse, BotResponse, BotStatusResponse, CreateBotRequest, DeployBotRequest,
    MessageResponse, UpdateBotRequest,
};

use super::audit::AuditRecorder;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Bot service
pub struct BotService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BotService<'a> {
    /// Create a new BotService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fetch a live bot entity
    pub async fn get_bot_entity(&self, bot_id: i64) -> ServiceResult<Bot> {
        self.ctx
            .bot_repo()
            .find_by_id(bot_id)
            .await?
            .ok_or_else(|| DomainError::BotNotFound(bot_id).into())
    }

    /// All live bots, id ascending
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<BotResponse>> {
        let bots = self.ctx.bot_repo().list().await?;
        Ok(bots.into_iter().map(BotResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, bot_id: i64) -> ServiceResult<BotResponse> {
        self.get_bot_entity(bot_id).await.map(BotResponse::from)
    }

    /// Register a new bot in the `stopped` status
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(&self, actor: i64, request: CreateBotRequest) -> ServiceResult<BotResponse> {
        if request.name.trim().is_empty() {
            return Err(DomainError::MissingField("name").into());
        }

        let bot = self.ctx.bot_repo().create(&NewBot::from(request)).await?;

        info!(bot_id = bot.id, "Bot created");
        self.audit(actor, DomainEvent::BotCreated(BotEvent::from(&bot)))
            .await;

        Ok(BotResponse::from(bot))
    }

    /// Apply a partial update; absent fields keep their values
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        actor: i64,
        bot_id: i64,
        request: UpdateBotRequest,
    ) -> ServiceResult<BotResponse> {
        let patch = BotPatch::from(request);
        if patch.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
            return Err(DomainError::MissingField("name").into());
        }

        if patch.is_empty() {
            return Ok(BotResponse::from(self.get_bot_entity(bot_id).await?));
        }

        let bot = self.ctx.bot_repo().update(bot_id, &patch).await?;

        info!(bot_id, "Bot updated");
        self.audit(actor, DomainEvent::BotUpdated(BotEvent::from(&bot)))
            .await;

        Ok(BotResponse::from(bot))
    }

    /// Soft delete a bot
    #[instrument(skip(self))]
    pub async fn delete(&self, actor: i64, bot_id: i64) -> ServiceResult<MessageResponse> {
        let bot = self.get_bot_entity(bot_id).await?;
        self.ctx.bot_repo().delete(bot_id).await?;

        info!(bot_id, "Bot deleted");
        self.audit(actor, DomainEvent::BotDeleted(BotEvent::from(&bot)))
            .await;

        Ok(MessageResponse::new("Bot deleted successfully"))
    }

    /// Run a lifecycle command against the status transition table
    ///
    /// Start and stop are persisted with a conditional update, so of two
    /// concurrent identical commands only one succeeds.
    #[instrument(skip(self))]
    pub async fn transition(
        &self,
        actor: i64,
        bot_id: i64,
        command: BotCommand,
    ) -> ServiceResult<BotActionResponse> {
        let current = self.get_bot_entity(bot_id).await?;
        let next = current.status.apply(command)?;

        let bot = match self
            .ctx
            .bot_repo()
            .set_status(bot_id, next, command.required_status())
            .await?
        {
            Some(bot) => bot,
            None => {
                // Lost a race: report what the row looks like now
                let latest = self.get_bot_entity(bot_id).await?;
                return Err(DomainError::InvalidTransition {
                    command: command.as_str(),
                    current: latest.status,
                }
                .into());
            }
        };

        info!(bot_id, command = %command, status = %bot.status, "Bot status changed");
        self.audit(actor, DomainEvent::lifecycle(command, &bot)).await;

        let message = match command {
            BotCommand::Start => "Bot started successfully",
            BotCommand::Stop => "Bot stopped successfully",
            BotCommand::Restart => "Bot restarted successfully",
        };
        Ok(BotActionResponse::new(message, bot))
    }

    /// Record a new version; the status is left alone
    #[instrument(skip(self, request), fields(version = %request.version))]
    pub async fn deploy(
        &self,
        actor: i64,
        bot_id: i64,
        request: DeployBotRequest,
    ) -> ServiceResult<BotActionResponse> {
        self.get_bot_entity(bot_id).await?;
        if request.version.trim().is_empty() {
            return Err(DomainError::MissingField("version").into());
        }

        let bot = self
            .ctx
            .bot_repo()
            .set_version(bot_id, &request.version)
            .await?;

        info!(bot_id, version = %bot.version, "Bot deployed");
        self.audit(actor, DomainEvent::BotDeployed(BotDeployedEvent::from(&bot)))
            .await;

        Ok(BotActionResponse::new("Bot deployed successfully", bot))
    }

    #[instrument(skip(self))]
    pub async fn status(&self, bot_id: i64) -> ServiceResult<BotStatusResponse> {
        let bot = self.get_bot_entity(bot_id).await?;
        Ok(BotStatusResponse::from(bot.status_view()))
    }

    async fn audit(&self, actor: i64, event: DomainEvent) {
        AuditRecorder::new(self.ctx).record(Some(actor), &event).await;
    }
}
