//! Schedule service
//!
//! Cron triggers attached to bots. Expressions are checked for shape only.

use bot_core::entities::NewSchedule;
use bot_core::events::{DomainEvent, ScheduleEvent};
use bot_core::value_objects::CronExpression;
use bot_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{CreateScheduleRequest, MessageResponse, ScheduleResponse};

use super::audit::AuditRecorder;
use super::bot::BotService;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Schedule service
pub struct ScheduleService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ScheduleService<'a> {
    /// Create a new ScheduleService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Schedules of a live bot, id ascending
    #[instrument(skip(self))]
    pub async fn list(&self, bot_id: i64) -> ServiceResult<Vec<ScheduleResponse>> {
        BotService::new(self.ctx).get_bot_entity(bot_id).await?;

        let schedules = self.ctx.schedule_repo().find_by_bot(bot_id).await?;
        Ok(schedules.into_iter().map(ScheduleResponse::from).collect())
    }

    #[instrument(skip(self, request), fields(cron = %request.cron_expression))]
    pub async fn create(
        &self,
        actor: i64,
        bot_id: i64,
        request: CreateScheduleRequest,
    ) -> ServiceResult<ScheduleResponse> {
        BotService::new(self.ctx).get_bot_entity(bot_id).await?;
        let cron_expression = CronExpression::parse(&request.cron_expression)?;

        let schedule = self
            .ctx
            .schedule_repo()
            .create(&NewSchedule {
                bot_id,
                cron_expression,
                is_active: request.is_active.unwrap_or(true),
            })
            .await?;

        info!(schedule_id = schedule.id, bot_id, "Schedule created");
        AuditRecorder::new(self.ctx)
            .record(
                Some(actor),
                &DomainEvent::ScheduleCreated(ScheduleEvent::from(&schedule)),
            )
            .await;

        Ok(ScheduleResponse::from(schedule))
    }

    /// Soft delete a schedule
    #[instrument(skip(self))]
    pub async fn delete(&self, actor: i64, schedule_id: i64) -> ServiceResult<MessageResponse> {
        let schedule = self
            .ctx
            .schedule_repo()
            .find_by_id(schedule_id)
            .await?
            .ok_or(DomainError::ScheduleNotFound(schedule_id))?;

        self.ctx.schedule_repo().delete(schedule_id).await?;

        info!(schedule_id, "Schedule deleted");
        AuditRecorder::new(self.ctx)
            .record(
                Some(actor),
                &DomainEvent::ScheduleDeleted(ScheduleEvent::from(&schedule)),
            )
            .await;

        Ok(MessageResponse::new("Schedule deleted successfully"))
    }
}
