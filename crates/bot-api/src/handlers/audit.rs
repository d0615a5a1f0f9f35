//! Audit log handlers

use axum::{extract::State, Json};
use bot_service::dto::{AuditLogQuery, AuditLogResponse};
use bot_service::AuditService;

use crate::extractors::{AuthUser, IdPath, QueryParams};
use crate::response::ApiResult;
use crate::state::AppState;

/// List audit entries, newest first
///
/// GET /audit?user_id=&action=&limit=&offset=
pub async fn list_audit_logs(
    State(state): State<AppState>,
    _auth: AuthUser,
    QueryParams(query): QueryParams<AuditLogQuery>,
) -> ApiResult<Json<Vec<AuditLogResponse>>> {
    let service = AuditService::new(state.service_context());
    let response = service.list(query).await?;
    Ok(Json(response))
}

/// GET /audit/{id}
pub async fn get_audit_log(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<AuditLogResponse>> {
    let service = AuditService::new(state.service_context());
    let response = service.get(id).await?;
    Ok(Json(response))
}
