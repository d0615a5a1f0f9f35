//! HTTP request handlers
//!
//! Handlers are thin: extract, call the matching service, wrap the result.

pub mod audit;
pub mod auth;
pub mod bots;
pub mod schedules;
pub mod users;
