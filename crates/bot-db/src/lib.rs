//! # bot-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management and embedded migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - PostgreSQL repository implementations
//! - An in-memory store implementing the same traits
//! - Development seed data
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bot_db::{create_pool, run_migrations, PgBotRepository};
//! use bot_core::traits::BotRepository;
//!
//! async fn example(config: &bot_common::DatabaseConfig) -> anyhow::Result<()> {
//!     let pool = create_pool(config).await?;
//!     run_migrations(&pool).await?;
//!     let bots = PgBotRepository::new(pool);
//!     let all = bots.list().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod seed;

// Re-export commonly used types
pub use memory::MemoryStore;
pub use pool::{create_pool, run_migrations, PgPool};
pub use repositories::{
    PgAuditLogRepository, PgBotRepository, PgRunRepository, PgScheduleRepository,
    PgUserRepository,
};
pub use seed::{seed_if_empty, SeedError};
