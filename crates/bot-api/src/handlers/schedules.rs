//! Schedule and run history handlers

use axum::{extract::State, Json};
use bot_service::dto::{
    CreateScheduleRequest, MessageResponse, PageQuery, RunResponse, ScheduleResponse,
};
use bot_service::{RunService, ScheduleService};

use crate::extractors::{AdminUser, AuthUser, IdPath, QueryParams, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// GET /bots/{id}/schedules
pub async fn list_schedules(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(bot_id): IdPath,
) -> ApiResult<Json<Vec<ScheduleResponse>>> {
    let service = ScheduleService::new(state.service_context());
    let response = service.list(bot_id).await?;
    Ok(Json(response))
}

/// POST /bots/{id}/schedules
pub async fn create_schedule(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(bot_id): IdPath,
    ValidatedJson(request): ValidatedJson<CreateScheduleRequest>,
) -> ApiResult<Created<Json<ScheduleResponse>>> {
    let service = ScheduleService::new(state.service_context());
    let response = service.create(auth.user_id, bot_id, request).await?;
    Ok(Created(Json(response)))
}

/// Delete a schedule (admin)
///
/// DELETE /schedules/{id}
pub async fn delete_schedule(
    State(state): State<AppState>,
    AdminUser(auth): AdminUser,
    IdPath(schedule_id): IdPath,
) -> ApiResult<Json<MessageResponse>> {
    let service = ScheduleService::new(state.service_context());
    let response = service.delete(auth.user_id, schedule_id).await?;
    Ok(Json(response))
}

/// GET /bots/{id}/runs
pub async fn list_runs(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(bot_id): IdPath,
    QueryParams(page): QueryParams<PageQuery>,
) -> ApiResult<Json<Vec<RunResponse>>> {
    let service = RunService::new(state.service_context());
    let response = service.list(bot_id, page).await?;
    Ok(Json(response))
}
