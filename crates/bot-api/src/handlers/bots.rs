//! Bot handlers
//!
//! Registry CRUD, lifecycle commands, deploy and status.

use axum::{extract::State, Json};
use bot_core::value_objects::BotCommand;
use bot_service::dto::{
    BotActionResponse, BotResponse, BotStatusResponse, CreateBotRequest, DeployBotRequest,
    MessageResponse, UpdateBotRequest,
};
use bot_service::BotService;

use crate::extractors::{AdminUser, AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List bots
///
/// GET /bots
pub async fn list_bots(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<BotResponse>>> {
    let service = BotService::new(state.service_context());
    let response = service.list().await?;
    Ok(Json(response))
}

/// Create a bot
///
/// POST /bots
pub async fn create_bot(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateBotRequest>,
) -> ApiResult<Created<Json<BotResponse>>> {
    let service = BotService::new(state.service_context());
    let response = service.create(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Get bot by ID
///
/// GET /bots/{id}
pub async fn get_bot(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(bot_id): IdPath,
) -> ApiResult<Json<BotResponse>> {
    let service = BotService::new(state.service_context());
    let response = service.get(bot_id).await?;
    Ok(Json(response))
}

/// Partially update a bot
///
/// PUT /bots/{id}
pub async fn update_bot(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(bot_id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateBotRequest>,
) -> ApiResult<Json<BotResponse>> {
    let service = BotService::new(state.service_context());
    let response = service.update(auth.user_id, bot_id, request).await?;
    Ok(Json(response))
}

/// Delete a bot (admin)
///
/// DELETE /bots/{id}
pub async fn delete_bot(
    State(state): State<AppState>,
    AdminUser(auth): AdminUser,
    IdPath(bot_id): IdPath,
) -> ApiResult<Json<MessageResponse>> {
    let service = BotService::new(state.service_context());
    let response = service.delete(auth.user_id, bot_id).await?;
    Ok(Json(response))
}

/// POST /bots/{id}/start
pub async fn start_bot(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(bot_id): IdPath,
) -> ApiResult<Json<BotActionResponse>> {
    run_command(&state, &auth, bot_id, BotCommand::Start).await
}

/// POST /bots/{id}/stop
pub async fn stop_bot(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(bot_id): IdPath,
) -> ApiResult<Json<BotActionResponse>> {
    run_command(&state, &auth, bot_id, BotCommand::Stop).await
}

/// POST /bots/{id}/restart
pub async fn restart_bot(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(bot_id): IdPath,
) -> ApiResult<Json<BotActionResponse>> {
    run_command(&state, &auth, bot_id, BotCommand::Restart).await
}

async fn run_command(
    state: &AppState,
    auth: &AuthUser,
    bot_id: i64,
    command: BotCommand,
) -> ApiResult<Json<BotActionResponse>> {
    let service = BotService::new(state.service_context());
    let response = service.transition(auth.user_id, bot_id, command).await?;
    Ok(Json(response))
}

/// Deploy a new version (admin)
///
/// POST /bots/{id}/deploy
pub async fn deploy_bot(
    State(state): State<AppState>,
    AdminUser(auth): AdminUser,
    IdPath(bot_id): IdPath,
    ValidatedJson(request): ValidatedJson<DeployBotRequest>,
) -> ApiResult<Json<BotActionResponse>> {
    let service = BotService::new(state.service_context());
    let response = service.deploy(auth.user_id, bot_id, request).await?;
    Ok(Json(response))
}

/// GET /bots/{id}/status
pub async fn bot_status(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(bot_id): IdPath,
) -> ApiResult<Json<BotStatusResponse>> {
    let service = BotService::new(state.service_context());
    let response = service.status(bot_id).await?;
    Ok(Json(response))
}
