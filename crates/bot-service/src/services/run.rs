//! Run history service

use tracing::instrument;

use crate::dto::{PageQuery, RunResponse};

use super::bot::BotService;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Run history service
pub struct RunService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RunService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Runs of a live bot, newest first
    #[instrument(skip(self))]
    pub async fn list(&self, bot_id: i64, page: PageQuery) -> ServiceResult<Vec<RunResponse>> {
        BotService::new(self.ctx).get_bot_entity(bot_id).await?;

        let (limit, offset) = page.resolve();
        let runs = self.ctx.run_repo().find_by_bot(bot_id, limit, offset).await?;
        Ok(runs.into_iter().map(RunResponse::from).collect())
    }
}
