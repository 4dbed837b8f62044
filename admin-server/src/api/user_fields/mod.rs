//! User Field API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /admin/config/user_fields(.json) | GET | 按 position 排序的字段列表 |
//! | /admin/config/user_fields(.json) | POST | 创建字段 |
//! | /admin/config/user_fields/{id}(.json) | PUT | 部分更新 |
//! | /admin/config/user_fields/{id}(.json) | DELETE | 删除字段 |

mod handler;

use axum::{Router, routing::get, routing::put};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/admin/config/user_fields",
            get(handler::list).post(handler::create),
        )
        .route(
            "/admin/config/user_fields.json",
            get(handler::list).post(handler::create),
        )
        .route(
            "/admin/config/user_fields/{id}",
            put(handler::update).delete(handler::destroy),
        )
}
