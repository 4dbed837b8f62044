use shared::AppError;
use thiserror::Error;

/// 服务器启动和运行期间的错误
///
/// 请求级别的错误走 [`AppError`]，这里只处理进程级别的失败。
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("初始化失败: {0}")]
    Init(#[from] AppError),

    #[error("无法绑定地址 {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP 服务异常退出: {0}")]
    Serve(#[source] std::io::Error),
}

/// 服务器 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_error_wraps_app_error() {
        let err: ServerError = AppError::database("disk full").into();
        assert!(err.to_string().contains("disk full"));
    }
}
