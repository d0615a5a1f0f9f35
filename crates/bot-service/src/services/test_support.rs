//! Shared fixtures for service tests

use std::sync::Arc;

use bot_common::auth::JwtService;
use bot_core::entities::{NewUser, User};
use bot_core::value_objects::Role;
use bot_db::MemoryStore;

use super::context::ServiceContext;

pub const TEST_SECRET: &str = "test-secret";

/// Context backed by a fresh in-memory store
pub fn context() -> (ServiceContext, MemoryStore) {
    let store = MemoryStore::new();
    let ctx = ServiceContext::builder()
        .memory(&store)
        .jwt_service(Arc::new(JwtService::new(TEST_SECRET, 3600, 3600)))
        .build()
        .expect("context");
    (ctx, store)
}

/// Insert a user directly, bypassing password hashing
pub async fn create_user(ctx: &ServiceContext, email: &str, role: Role) -> User {
    ctx.user_repo()
        .create(&NewUser::new("Test User", email, role), "not-a-real-hash")
        .await
        .expect("create user")
}
