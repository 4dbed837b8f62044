//! Admin Server - 配色方案与用户资料字段的管理后台服务
//!
//! # 架构概述
//!
//! - **HTTP API** (`api`): 配色方案、用户字段、健康检查
//! - **数据库** (`db`): SQLite (sqlx) 存储和迁移
//! - **中间件** (`middleware`): 请求日志
//!
//! # 模块结构
//!
//! ```text
//! admin-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层 (repository)
//! ├── middleware/    # 请求日志
//! ├── routes/        # 路由和中间件组装
//! └── utils/         # 日志、校验
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod routes;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerError, ServerState};
pub use db::DbService;
pub use routes::{build_app, build_router};
pub use shared::{AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境: 加载 .env 并初始化日志
///
/// 日志级别和目录读取自 [`Config::from_env`]，生产环境输出 JSON。
pub fn setup_environment() -> anyhow::Result<Config> {
    // .env 不存在时忽略
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    init_logger_with_file(
        &config.log_level,
        config.is_production(),
        config.log_dir.as_deref(),
    )?;
    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
    ___       __          _
   /   | ____/ /___ ___  (_)___
  / /| |/ __  / __ `__ \/ / __ \
 / ___ / /_/ / / / / / / / / / /
/_/  |_\__,_/_/ /_/ /_/_/_/ /_/
    "#
    );
}
