//! Color Scheme API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /admin/color_schemes(.json) | GET | 内置调色板 + 已保存方案 |
//! | /admin/color_schemes(.json) | POST | 创建方案 |
//! | /admin/color_schemes/{id}(.json) | PUT | 更新方案 (颜色按名称合并) |
//! | /admin/color_schemes/{id}(.json) | DELETE | 删除方案 |

mod handler;

use axum::{Router, routing::get, routing::put};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/admin/color_schemes", get(handler::index).post(handler::create))
        .route(
            "/admin/color_schemes.json",
            get(handler::index).post(handler::create),
        )
        .route(
            "/admin/color_schemes/{id}",
            put(handler::update).delete(handler::destroy),
        )
}
