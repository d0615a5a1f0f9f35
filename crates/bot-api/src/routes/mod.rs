//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{audit, auth, bots, schedules, users};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(bot_routes())
        .merge(schedule_routes())
        .merge(audit_routes())
        .merge(user_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/me", get(auth::me))
}

/// Bot registry and lifecycle routes
fn bot_routes() -> Router<AppState> {
    Router::new()
        .route("/bots", get(bots::list_bots).post(bots::create_bot))
        .route(
            "/bots/:id",
            get(bots::get_bot).put(bots::update_bot).delete(bots::delete_bot),
        )
        .route("/bots/:id/start", post(bots::start_bot))
        .route("/bots/:id/stop", post(bots::stop_bot))
        .route("/bots/:id/restart", post(bots::restart_bot))
        .route("/bots/:id/deploy", post(bots::deploy_bot))
        .route("/bots/:id/status", get(bots::bot_status))
        .route(
            "/bots/:id/schedules",
            get(schedules::list_schedules).post(schedules::create_schedule),
        )
        .route("/bots/:id/runs", get(schedules::list_runs))
}

/// Schedule routes
fn schedule_routes() -> Router<AppState> {
    Router::new().route("/schedules/:id", delete(schedules::delete_schedule))
}

/// Audit routes
fn audit_routes() -> Router<AppState> {
    Router::new()
        .route("/audit", get(audit::list_audit_logs))
        .route("/audit/:id", get(audit::get_audit_log))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new().route("/users/:id", delete(users::delete_user))
}
