// ==========================================
// 供应链驾驶舱 - 核心库
// ==========================================
// 技术栈: Rust + tokio + serde
// 系统定位: 库存决策支持系统 (人工最终控制权)
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 告警分类/补货建议/表格排序
pub mod engine;

// 配置层 - 引擎配置与示例数据
pub mod config;

// 导出层 - CSV
pub mod export;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{
    AccuracyBand, FeedbackVerdict, ForecastBias, RankedEnum, Severity, StockStatus,
};

// 领域实体
pub use domain::{
    AdvisoryReport, Alert, AlertInput, ForecastProduct, InputField, InventoryItem, ReorderAdvice,
    ReorderRecommendation,
};

// 引擎
pub use engine::{AlertClassifier, ForecastOverrides, ReorderAdvisor, SortController};

// API
pub use api::{AdvisoryApi, ApiError, ApiResult, DashboardApi, FeedbackApi};

// 配置
pub use config::{ConfigManager, DashboardDataset, EngineConfig};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "供应链驾驶舱";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
