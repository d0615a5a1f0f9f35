//! Entity to model mappers
//!
//! Conversions from database rows to domain objects. Columns backed by closed
//! enums (`role`, `status`) are parsed, so those conversions are fallible.

mod audit_log;
mod bot;
mod user;

pub use bot::try_collect;
