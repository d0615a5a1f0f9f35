//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use bot_common::{AppConfig, AppError, JwtService};
use bot_db::{create_pool, run_migrations, seed_if_empty, MemoryStore};
use bot_service::{ServiceContext, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let router = apply_middleware(create_router(), state.config())?;
    Ok(router.with_state(state))
}

fn jwt_service(config: &AppConfig) -> Arc<JwtService> {
    Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.expiry_seconds(),
        config.jwt.refresh_grace_seconds,
    ))
}

/// Initialize PostgreSQL-backed dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&config.database)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    let service_context = ServiceContextBuilder::new()
        .postgres(&pool)
        .jwt_service(jwt_service(&config))
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    finish_state(service_context, config).await
}

/// Create AppState over an in-memory store
pub async fn create_memory_app_state(
    config: AppConfig,
    store: &MemoryStore,
) -> Result<AppState, AppError> {
    let service_context = ServiceContextBuilder::new()
        .memory(store)
        .jwt_service(jwt_service(&config))
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    finish_state(service_context, config).await
}

async fn finish_state(service_context: ServiceContext, config: AppConfig) -> Result<AppState, AppError> {
    if config.app.seed_database {
        let seeded = seed_if_empty(
            service_context.user_repo(),
            service_context.bot_repo(),
            service_context.schedule_repo(),
        )
        .await
        .map_err(AppError::internal)?;

        if seeded {
            info!("Seeded empty database with demo data");
        }
    }

    Ok(AppState::new(service_context, config))
}

/// Serve `app` on an already bound listener
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), AppError> {
    let addr = listener
        .local_addr()
        .map_err(|e| AppError::Config(format!("Failed to read listener address: {e}")))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    info!("Starting HTTP server on {}", addr);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    serve(listener, app).await
}
