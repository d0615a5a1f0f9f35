//! Integration test utilities for the bot management API
//!
//! Spawns the full axum application over an in-memory store and drives it
//! over real HTTP.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
