//! User Field API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

use crate::api::parse_id;
use crate::core::ServerState;
use crate::db::repository::{ResourceCodes, user_field};
use shared::models::{UserField, UserFieldCreate, UserFieldEnvelope, UserFieldList, UserFieldUpdate};
use shared::{AppResult, ErrorCode, SuccessBody};

const CODES: ResourceCodes = ResourceCodes {
    not_found: ErrorCode::UserFieldNotFound,
    invalid: ErrorCode::UserFieldInvalid,
    duplicate: ErrorCode::AlreadyExists,
};

/// GET /admin/config/user_fields - 获取所有字段
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<UserFieldList>> {
    let user_fields = user_field::find_all(&state.pool)
        .await
        .map_err(|e| e.into_app_error(CODES))?;
    Ok(Json(UserFieldList { user_fields }))
}

/// POST /admin/config/user_fields - 创建字段
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<UserFieldEnvelope<UserFieldCreate>>, JsonRejection>,
) -> AppResult<Json<UserFieldEnvelope<UserField>>> {
    let Json(payload) = payload?;
    let field = user_field::create(&state.pool, payload.user_field)
        .await
        .map_err(|e| e.into_app_error(CODES))?;
    Ok(Json(UserFieldEnvelope { user_field: field }))
}

/// PUT /admin/config/user_fields/:id - 更新字段
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<UserFieldEnvelope<UserFieldUpdate>>, JsonRejection>,
) -> AppResult<Json<UserFieldEnvelope<UserField>>> {
    let id = parse_id(&id)?;
    let Json(payload) = payload?;
    let field = user_field::update(&state.pool, id, payload.user_field)
        .await
        .map_err(|e| e.into_app_error(CODES))?;
    Ok(Json(UserFieldEnvelope { user_field: field }))
}

/// DELETE /admin/config/user_fields/:id - 删除字段
pub async fn destroy(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<SuccessBody>> {
    let id = parse_id(&id)?;
    user_field::delete(&state.pool, id)
        .await
        .map_err(|e| e.into_app_error(CODES))?;
    Ok(Json(SuccessBody::ok()))
}
