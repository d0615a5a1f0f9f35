//! Development seed data
//!
//! Inserted once, when the store has no users: an admin, a viewer, and a
//! sample bot with a daily schedule.

use serde_json::json;
use tracing::{info, instrument};

use bot_common::{AppError, PasswordService};
use bot_core::entities::{NewBot, NewSchedule, NewUser};
use bot_core::traits::{BotRepository, ScheduleRepository, UserRepository};
use bot_core::value_objects::{CronExpression, Role};

/// Seed errors
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error(transparent)]
    Domain(#[from] bot_core::DomainError),

    #[error(transparent)]
    Password(#[from] AppError),
}

/// Accounts created by the seed: (name, email, password, role)
pub const SEED_USERS: [(&str, &str, &str, Role); 2] = [
    ("Admin User", "admin@example.com", "admin123", Role::Admin),
    ("Viewer User", "viewer@example.com", "viewer123", Role::Viewer),
];

/// Insert demo data unless users already exist. Returns whether anything was written.
#[instrument(skip_all)]
pub async fn seed_if_empty(
    users: &dyn UserRepository,
    bots: &dyn BotRepository,
    schedules: &dyn ScheduleRepository,
) -> Result<bool, SeedError> {
    if users.count().await? > 0 {
        return Ok(false);
    }

    let passwords = PasswordService::new();
    for (name, email, password, role) in SEED_USERS {
        let hash = passwords.hash(password).await?;
        users.create(&NewUser::new(name, email, role), &hash).await?;
    }

    let bot = bots
        .create(&NewBot {
            name: "Sample Scraper Bot".to_string(),
            description: "A sample web scraping bot for demonstration".to_string(),
            version: "1.0.0".to_string(),
            config: json!({
                "target_url": "https://example.com",
                "timeout": 30,
                "retry_count": 3
            }),
        })
        .await?;

    schedules
        .create(&NewSchedule {
            bot_id: bot.id,
            cron_expression: CronExpression::parse("0 0 * * *")?,
            is_active: true,
        })
        .await?;

    info!(bot_id = bot.id, "Seeded development data");
    Ok(true)
}
