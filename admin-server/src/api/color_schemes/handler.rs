//! Color Scheme API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

use crate::api::parse_id;
use crate::core::ServerState;
use crate::db::repository::{ResourceCodes, color_scheme};
use shared::models::{BUILTIN_PALETTES, ColorScheme, ColorSchemePayload};
use shared::{AppResult, ErrorCode, SuccessBody};

const CODES: ResourceCodes = ResourceCodes {
    not_found: ErrorCode::ColorSchemeNotFound,
    invalid: ErrorCode::ColorSchemeInvalid,
    duplicate: ErrorCode::ColorSchemeNameExists,
};

/// GET /admin/color_schemes - 内置调色板在前 (第一个为 base)，随后是已保存方案
pub async fn index(State(state): State<ServerState>) -> AppResult<Json<Vec<ColorScheme>>> {
    let stored = color_scheme::find_all(&state.pool)
        .await
        .map_err(|e| e.into_app_error(CODES))?;

    let schemes = BUILTIN_PALETTES
        .iter()
        .map(|p| p.to_scheme())
        .chain(stored)
        .collect();
    Ok(Json(schemes))
}

/// POST /admin/color_schemes - 创建方案
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<ColorSchemePayload>, JsonRejection>,
) -> AppResult<Json<ColorScheme>> {
    let Json(payload) = payload?;
    let scheme = color_scheme::create(&state.pool, payload.into_params())
        .await
        .map_err(|e| e.into_app_error(CODES))?;
    Ok(Json(scheme))
}

/// PUT /admin/color_schemes/:id - 更新方案
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<ColorSchemePayload>, JsonRejection>,
) -> AppResult<Json<ColorScheme>> {
    let id = parse_id(&id)?;
    let Json(payload) = payload?;
    let scheme = color_scheme::update(&state.pool, id, payload.into_params())
        .await
        .map_err(|e| e.into_app_error(CODES))?;
    Ok(Json(scheme))
}

/// DELETE /admin/color_schemes/:id - 删除方案及其颜色
pub async fn destroy(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<SuccessBody>> {
    let id = parse_id(&id)?;
    color_scheme::delete(&state.pool, id)
        .await
        .map_err(|e| e.into_app_error(CODES))?;
    Ok(Json(SuccessBody::ok()))
}
