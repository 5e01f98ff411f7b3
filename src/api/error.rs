// ==========================================
// 供应链驾驶舱 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，将配置/导出/任务错误转换为用户可读的错误消息
// 红线: 所有错误信息必须包含显式原因
// ==========================================

use crate::config::config_manager::ConfigError;
use crate::domain::alert::InputField;
use crate::export::ExportError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入错误
    // ==========================================
    /// 表单校验失败（带逐字段违规详情）
    #[error("输入校验失败: {reason}")]
    ValidationError {
        reason: String,
        violations: Vec<ValidationViolation>,
    },

    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    // ==========================================
    // 基础设施错误
    // ==========================================
    #[error("配置错误: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("导出失败: {0}")]
    ExportError(#[from] ExportError),

    // ==========================================
    // 任务错误
    // ==========================================
    /// 调用方取消了生成任务（结果已丢弃）
    #[error("任务已取消")]
    Cancelled,

    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    /// 校验违规详情（非校验错误返回空切片）
    pub fn violations(&self) -> &[ValidationViolation] {
        match self {
            ApiError::ValidationError { violations, .. } => violations,
            _ => &[],
        }
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        if err.is_cancelled() {
            ApiError::Cancelled
        } else {
            ApiError::InternalError(format!("任务执行失败: {}", err))
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

// ==========================================
// 校验违规详情
// ==========================================

/// 校验违规详情
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationViolation {
    /// 违规字段
    pub field: InputField,
    /// 最小长度（字符数）
    pub min_length: usize,
    /// 实际长度（字符数）
    pub actual_length: usize,
    /// 违规原因（已本地化）
    pub reason: String,
}
