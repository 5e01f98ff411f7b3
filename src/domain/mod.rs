// ==========================================
// 供应链驾驶舱 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含引擎逻辑, 不含 I/O
// ==========================================

pub mod alert;
pub mod forecast;
pub mod inventory;
pub mod types;

// 重导出核心类型
pub use alert::{
    AdvisoryReport, Alert, AlertInput, InputField, ReorderAdvice, ReorderRecommendation,
};
pub use forecast::{ForecastField, ForecastProduct, MonthlyForecast, MonthlySales};
pub use inventory::{InventoryField, InventoryItem};
pub use types::{AccuracyBand, FeedbackVerdict, ForecastBias, RankedEnum, Severity, StockStatus};
