// ==========================================
// 生产运营驾驶舱 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，将存储/配置错误转换为调用方可读的消息
// ==========================================

use crate::config::ConfigError;
use crate::store::StoreError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 调用参数错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    // ==========================================
    // 下层错误
    // ==========================================
    #[error("数据来源错误: {0}")]
    Store(#[from] StoreError),

    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
