use std::path::PathBuf;

/// 服务器配置 - 管理后台服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 (数据库、日志) |
/// | HTTP_HOST | 0.0.0.0 | 监听地址 |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | DATABASE_PATH | $WORK_DIR/admin.db | SQLite 数据库文件 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 默认日志级别 (RUST_LOG 优先) |
/// | LOG_DIR | - | 设置后按天滚动写入日志文件 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/admin HTTP_PORT=8080 cargo run -p admin-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录
    pub work_dir: String,
    /// 监听地址
    pub http_host: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// SQLite 数据库文件路径
    pub database_path: String,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 默认日志级别
    pub log_level: String,
    /// 日志目录 (None 时只输出到 stdout)
    pub log_dir: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        let work_dir = std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into());
        let database_path = std::env::var("DATABASE_PATH").unwrap_or_else(|_| {
            PathBuf::from(&work_dir)
                .join("admin.db")
                .to_string_lossy()
                .into_owned()
        });

        Self {
            http_host: std::env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_path,
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            work_dir,
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let work_dir = work_dir.into();
        let mut config = Self::from_env();
        config.database_path = PathBuf::from(&work_dir)
            .join("admin.db")
            .to_string_lossy()
            .into_owned();
        config.work_dir = work_dir;
        config.http_port = http_port;
        config
    }

    /// `host:port` the HTTP listener binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_overrides_moves_database_into_work_dir() {
        let config = Config::with_overrides("/tmp/admin-test", 4001);
        assert_eq!(config.work_dir, "/tmp/admin-test");
        assert_eq!(config.http_port, 4001);
        assert!(config.database_path.starts_with("/tmp/admin-test"));
        assert!(config.database_path.ends_with("admin.db"));
    }

    #[test]
    fn test_bind_addr() {
        let mut config = Config::with_overrides("/tmp/admin-test", 4002);
        config.http_host = "127.0.0.1".into();
        assert_eq!(config.bind_addr(), "127.0.0.1:4002");
    }
}
