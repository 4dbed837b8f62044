//! 工具模块 - 日志和输入校验
//!
//! # 内容
//!
//! - [`logger`] - 日志初始化
//! - [`validation`] - 文本长度和资源校验

pub mod logger;
pub mod validation;

pub use shared::{AppError, AppResult, ErrorCode};
