//! API Integration Tests
//!
//! Every test spawns its own server over a fresh in-memory store, so no
//! external services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use chrono::Utc;
use integration_tests::{
    assert_json, assert_status, fixtures::*, test_config, TestServer, SEED_ADMIN,
};
use reqwest::StatusCode;
use serde_json::json;

async fn create_bot(server: &TestServer, token: &str) -> BotResponse {
    let response = server
        .post_auth("/bots", token, &CreateBotRequest::unique())
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// End-to-end scenario
// ============================================================================

#[tokio::test]
async fn test_register_login_start_and_audit() {
    let server = TestServer::start().await.expect("Failed to start server");

    let register = RegisterRequest::unique();
    let response = server.post("/auth/register", &register).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(user.email, register.email);
    assert_eq!(user.role, "viewer");

    let (_, token) = server.login(&register.email, &register.password).await.unwrap();

    let response = server.get_auth("/auth/me", &token).await.unwrap();
    let me: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.id, user.id);

    let bot = create_bot(&server, &token).await;
    assert_eq!(bot.status, "stopped");

    let path = format!("/bots/{}/start", bot.id);
    let response = server.post_empty_auth(&path, &token).await.unwrap();
    let started: BotActionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(started.message, "Bot started successfully");
    assert_eq!(started.bot.status, "running");

    let response = server.post_empty_auth(&path, &token).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "INVALID_STATUS_TRANSITION");

    let response = server
        .get_auth(&format!("/audit?user_id={}", user.id), &token)
        .await
        .unwrap();
    let entries: Vec<AuditLogResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let actions: Vec<&str> = entries.iter().map(|e| e.action.as_str()).collect();
    assert_eq!(actions, vec!["bot.start", "bot.create"]);
    assert_eq!(entries[0].details["bot_id"], bot.id);
    assert_eq!(entries[0].details["bot_name"], bot.name.as_str());
    assert_eq!(entries[0].user.as_ref().map(|u| u.id), Some(user.id));
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_duplicate_email() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    server.post("/auth/register", &request).await.unwrap();

    let response = server.post("/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_register_missing_fields() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/auth/register", &json!({"email": "a@example.com"}))
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_login_failures_look_the_same() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();
    server.post("/auth/register", &request).await.unwrap();

    let wrong_password = LoginRequest {
        email: request.email.clone(),
        password: "wrong".to_string(),
    };
    let unknown_email = LoginRequest {
        email: "nobody@example.com".to_string(),
        password: request.password.clone(),
    };

    let first = server.post("/auth/login", &wrong_password).await.unwrap();
    let first: ErrorBody = assert_json(first, StatusCode::UNAUTHORIZED).await.unwrap();
    let second = server.post("/auth/login", &unknown_email).await.unwrap();
    let second: ErrorBody = assert_json(second, StatusCode::UNAUTHORIZED).await.unwrap();

    assert_eq!(first.error.code, second.error.code);
    assert_eq!(first.error.message, second.error.message);
}

#[tokio::test]
async fn test_requires_bearer_token() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/bots").await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(error.error.code, "MISSING_AUTH");

    let response = server.get_auth("/bots", "not-a-token").await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(error.error.code, "INVALID_TOKEN");
}

#[tokio::test]
async fn test_refresh_and_logout() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (user, token) = server.register_and_login().await.unwrap();

    let response = server.post_empty_auth("/auth/refresh", &token).await.unwrap();
    let refreshed: TokenResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server.get_auth("/auth/me", &refreshed.token).await.unwrap();
    let me: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.id, user.id);

    let response = server.post_empty_auth("/auth/logout", &token).await.unwrap();
    let body: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Logged out successfully");
}

// ============================================================================
// Bot Tests
// ============================================================================

#[tokio::test]
async fn test_partial_update_keeps_other_fields() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = server.register_and_login().await.unwrap();
    let bot = create_bot(&server, &token).await;

    let response = server
        .put_auth(
            &format!("/bots/{}", bot.id),
            &token,
            &json!({"description": "updated"}),
        )
        .await
        .unwrap();
    let updated: BotResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.description, "updated");
    assert_eq!(updated.name, bot.name);
    assert_eq!(updated.version, bot.version);
    assert_eq!(updated.config, bot.config);
}

#[tokio::test]
async fn test_stop_restart_and_status() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = server.register_and_login().await.unwrap();
    let bot = create_bot(&server, &token).await;

    let response = server
        .post_empty_auth(&format!("/bots/{}/stop", bot.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    for _ in 0..2 {
        let response = server
            .post_empty_auth(&format!("/bots/{}/restart", bot.id), &token)
            .await
            .unwrap();
        let body: BotActionResponse = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(body.bot.status, "running");
    }

    let response = server
        .post_empty_auth(&format!("/bots/{}/stop", bot.id), &token)
        .await
        .unwrap();
    let stopped: BotActionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stopped.message, "Bot stopped successfully");

    let response = server
        .get_auth(&format!("/bots/{}/status", bot.id), &token)
        .await
        .unwrap();
    let status: BotStatusResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(status.id, bot.id);
    assert_eq!(status.name, bot.name);
    assert_eq!(status.status, "stopped");
    assert_eq!(status.version, "1.0.0");
}

#[tokio::test]
async fn test_unknown_bot_is_not_found() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = server.register_and_login().await.unwrap();

    let response = server.get_auth("/bots/9999", &token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.get_auth("/bots/abc", &token).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = server.register_and_login().await.unwrap();

    let response = server
        .client
        .post(format!("{}/bots", server.base_url()))
        .bearer_auth(&token)
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Access Guard Tests
// ============================================================================

#[tokio::test]
async fn test_admin_only_routes() {
    let server = TestServer::start_seeded().await.expect("Failed to start server");
    let (_, viewer) = server.register_and_login().await.unwrap();
    let (_, admin) = server.login(SEED_ADMIN.0, SEED_ADMIN.1).await.unwrap();
    let bot = create_bot(&server, &viewer).await;
    let path = format!("/bots/{}", bot.id);

    let response = server.delete_auth(&path, &viewer).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error.error.code, "INSUFFICIENT_PERMISSIONS");

    let response = server
        .post_auth(&format!("{path}/deploy"), &viewer, &json!({"version": "2.0.0"}))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.delete_auth(&path, &admin).await.unwrap();
    let body: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Bot deleted successfully");

    let response = server.get_auth(&path, &viewer).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_deploy_keeps_status() {
    let server = TestServer::start_seeded().await.expect("Failed to start server");
    let (_, admin) = server.login(SEED_ADMIN.0, SEED_ADMIN.1).await.unwrap();
    let bot = create_bot(&server, &admin).await;

    server
        .post_empty_auth(&format!("/bots/{}/start", bot.id), &admin)
        .await
        .unwrap();

    let response = server
        .post_auth(
            &format!("/bots/{}/deploy", bot.id),
            &admin,
            &json!({"version": "2.0.0"}),
        )
        .await
        .unwrap();
    let deployed: BotActionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(deployed.message, "Bot deployed successfully");
    assert_eq!(deployed.bot.version, "2.0.0");
    assert_eq!(deployed.bot.status, "running");

    let response = server
        .get_auth("/audit?action=bot.deploy", &admin)
        .await
        .unwrap();
    let entries: Vec<AuditLogResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].details["version"], "2.0.0");
}

// ============================================================================
// User / Audit Tests
// ============================================================================

#[tokio::test]
async fn test_purged_user_leaves_anonymous_audit_entries() {
    let server = TestServer::start_seeded().await.expect("Failed to start server");
    let (_, admin) = server.login(SEED_ADMIN.0, SEED_ADMIN.1).await.unwrap();
    let (viewer, viewer_token) = server.register_and_login().await.unwrap();
    let bot = create_bot(&server, &viewer_token).await;

    let response = server
        .delete_auth(&format!("/users/{}?purge=true", viewer.id), &admin)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_auth("/audit?action=bot.create", &admin)
        .await
        .unwrap();
    let entries: Vec<AuditLogResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let entry = entries
        .iter()
        .find(|e| e.details["bot_id"] == bot.id)
        .expect("bot.create entry survives");
    assert_eq!(entry.user_id, None);
    assert!(entry.user.is_none());

    let response = server
        .get_auth(&format!("/audit/{}", entry.id), &admin)
        .await
        .unwrap();
    let single: AuditLogResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(single.action, "bot.create");

    let response = server.get_auth("/audit/999999", &admin).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_deleted_user_cannot_log_in() {
    let server = TestServer::start_seeded().await.expect("Failed to start server");
    let (_, admin) = server.login(SEED_ADMIN.0, SEED_ADMIN.1).await.unwrap();
    let register = RegisterRequest::unique();
    let response = server.post("/auth/register", &register).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(&format!("/users/{}", user.id), &admin)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let login = LoginRequest {
        email: register.email,
        password: register.password,
    };
    let response = server.post("/auth/login", &login).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_audit_limit_is_clamped() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = server.register_and_login().await.unwrap();
    for _ in 0..3 {
        create_bot(&server, &token).await;
    }

    let response = server.get_auth("/audit?limit=0", &token).await.unwrap();
    let entries: Vec<AuditLogResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(entries.len(), 1);

    let response = server
        .get_auth("/audit?limit=2&offset=2", &token)
        .await
        .unwrap();
    let entries: Vec<AuditLogResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(entries.len(), 1);
}

// ============================================================================
// Schedule / Run Tests
// ============================================================================

#[tokio::test]
async fn test_schedules() {
    let server = TestServer::start_seeded().await.expect("Failed to start server");
    let (_, admin) = server.login(SEED_ADMIN.0, SEED_ADMIN.1).await.unwrap();
    let (_, viewer) = server.register_and_login().await.unwrap();
    let bot = create_bot(&server, &viewer).await;
    let path = format!("/bots/{}/schedules", bot.id);

    let response = server
        .post_auth(&path, &viewer, &json!({"cron_expression": "*/15 * * * *"}))
        .await
        .unwrap();
    let schedule: ScheduleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(schedule.bot_id, bot.id);
    assert!(schedule.is_active);

    let response = server
        .post_auth(&path, &viewer, &json!({"cron_expression": "every day"}))
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "INVALID_CRON_EXPRESSION");

    let response = server.get_auth(&path, &viewer).await.unwrap();
    let schedules: Vec<ScheduleResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(schedules.len(), 1);
    assert_eq!(schedules[0].cron_expression, "*/15 * * * *");

    let delete_path = format!("/schedules/{}", schedule.id);
    let response = server.delete_auth(&delete_path, &viewer).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
    let response = server.delete_auth(&delete_path, &admin).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get_auth(&path, &viewer).await.unwrap();
    let schedules: Vec<ScheduleResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(schedules.is_empty());
}

#[tokio::test]
async fn test_run_history() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = server.register_and_login().await.unwrap();
    let bot = create_bot(&server, &token).await;

    let now = Utc::now();
    let older = server.store.insert_run(
        bot.id,
        now - chrono::Duration::minutes(10),
        Some(now - chrono::Duration::minutes(9)),
        Some(true),
        "scraped 10 pages",
        json!({"pages": 10}),
    );
    let newer = server
        .store
        .insert_run(bot.id, now, None, None, "", json!({}));

    let response = server
        .get_auth(&format!("/bots/{}/runs", bot.id), &token)
        .await
        .unwrap();
    let runs: Vec<RunResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let ids: Vec<i64> = runs.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
    assert_eq!(runs[1].log, "scraped 10 pages");

    let response = server.get_auth("/bots/9999/runs", &token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Middleware Tests
// ============================================================================

#[tokio::test]
async fn test_request_id_is_returned() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/bots").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));

    let response = server
        .client
        .get(format!("{}/bots", server.base_url()))
        .header("x-request-id", "trace-me")
        .send()
        .await
        .unwrap();
    assert_eq!(
        response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("trace-me")
    );
}

#[tokio::test]
async fn test_rate_limited_requests_get_json_error() {
    let mut config = test_config(false).expect("Failed to build config");
    config.rate_limit.requests_per_second = 1;
    config.rate_limit.burst = 1;
    let server = TestServer::start_with_config(config)
        .await
        .expect("Failed to start server");

    let first = server.get("/bots").await.unwrap();
    assert_ne!(first.status(), StatusCode::TOO_MANY_REQUESTS);

    let second = server.get("/bots").await.unwrap();
    let error: ErrorBody = assert_json(second, StatusCode::TOO_MANY_REQUESTS)
        .await
        .unwrap();
    assert_eq!(error.error.code, "RATE_LIMIT_EXCEEDED");
}
