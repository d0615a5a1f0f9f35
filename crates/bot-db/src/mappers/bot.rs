//! Bot, schedule and run entity <-> model mappers

use bot_core::entities::{Bot, Run, Schedule};
use bot_core::error::DomainError;
use bot_core::value_objects::CronExpression;

use crate::models::{BotModel, RunModel, ScheduleModel};

impl TryFrom<BotModel> for Bot {
    type Error = DomainError;

    fn try_from(model: BotModel) -> Result<Self, Self::Error> {
        Ok(Bot {
            id: model.id,
            status: model.status.parse()?,
            name: model.name,
            description: model.description,
            version: model.version,
            config: model.config,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl TryFrom<ScheduleModel> for Schedule {
    type Error = DomainError;

    fn try_from(model: ScheduleModel) -> Result<Self, Self::Error> {
        Ok(Schedule {
            id: model.id,
            bot_id: model.bot_id,
            cron_expression: CronExpression::parse(&model.cron_expression)?,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl From<RunModel> for Run {
    fn from(model: RunModel) -> Self {
        Run {
            id: model.id,
            bot_id: model.bot_id,
            started_at: model.started_at,
            finished_at: model.finished_at,
            success: model.success,
            log: model.log,
            metrics: model.metrics,
            created_at: model.created_at,
        }
    }
}

/// Convert a batch of rows, failing on the first bad one
pub fn try_collect<M, E>(models: Vec<M>) -> Result<Vec<E>, DomainError>
where
    E: TryFrom<M, Error = DomainError>,
{
    models.into_iter().map(E::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bot_core::BotStatus;
    use chrono::Utc;
    use serde_json::json;

    fn bot_model(status: &str) -> BotModel {
        let now = Utc::now();
        BotModel {
            id: 3,
            name: "Sample Scraper Bot".to_string(),
            description: String::new(),
            version: "1.0.0".to_string(),
            config: json!({"timeout": 30}),
            status: status.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_bot_mapping() {
        let bot = Bot::try_from(bot_model("running")).unwrap();
        assert_eq!(bot.status, BotStatus::Running);
        assert_eq!(bot.config, json!({"timeout": 30}));
    }

    #[test]
    fn test_try_collect_fails_on_bad_row() {
        let rows = vec![bot_model("stopped"), bot_model("paused")];
        assert!(try_collect::<_, Bot>(rows).is_err());
    }
}
