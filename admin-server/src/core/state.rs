use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;
use shared::AppResult;

/// 服务器状态 - 持有配置和数据库连接池
///
/// 克隆开销很小 (`SqlitePool` 内部是 `Arc`)，每个请求拿到的是同一个池。
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// SQLite 连接池
    pub pool: SqlitePool,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 打开 (或创建) `config.database_path` 并执行迁移
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        let db = DbService::new(&config.database_path).await?;
        tracing::info!(
            environment = %config.environment,
            database = %config.database_path,
            "Server state initialized"
        );
        Ok(Self::with_pool(config.clone(), db.pool))
    }

    /// 使用已有连接池构造状态 (测试使用内存数据库)
    pub fn with_pool(config: Config, pool: SqlitePool) -> Self {
        Self { config, pool }
    }
}
