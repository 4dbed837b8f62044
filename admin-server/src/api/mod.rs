//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`color_schemes`] - 配色方案管理接口
//! - [`user_fields`] - 用户资料字段管理接口
//!
//! 资源路径同时接受 `.json` 后缀 (`/admin/color_schemes.json`,
//! `/admin/color_schemes/{id}.json`)。

pub mod color_schemes;
pub mod health;
pub mod user_fields;

pub use shared::{AppError, AppResult};
use shared::ErrorCode;

/// 解析路径中的资源 ID，允许 `.json` 后缀
pub fn parse_id(raw: &str) -> AppResult<i64> {
    let id = raw.strip_suffix(".json").unwrap_or(raw);
    id.parse::<i64>().map_err(|_| {
        AppError::with_message(ErrorCode::InvalidFormat, format!("Invalid id: {raw}"))
    })
}
