//! User handlers

use axum::{extract::State, Json};
use bot_service::dto::{DeleteUserQuery, MessageResponse};
use bot_service::UserService;

use crate::extractors::{AdminUser, IdPath, QueryParams};
use crate::response::ApiResult;
use crate::state::AppState;

/// Remove an account (admin)
///
/// DELETE /users/{id}?purge=true
pub async fn delete_user(
    State(state): State<AppState>,
    AdminUser(auth): AdminUser,
    IdPath(user_id): IdPath,
    QueryParams(query): QueryParams<DeleteUserQuery>,
) -> ApiResult<Json<MessageResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.delete(auth.user_id, user_id, query.purge).await?;
    Ok(Json(response))
}
