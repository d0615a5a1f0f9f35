//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, and path/query parameters.

mod auth;
mod path;
mod query;
mod validated;

pub use auth::{AdminUser, AuthUser, BearerToken};
pub use path::IdPath;
pub use query::QueryParams;
pub use validated::ValidatedJson;
