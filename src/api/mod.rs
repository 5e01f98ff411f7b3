// ==========================================
// 供应链驾驶舱 - API 层
// ==========================================
// 职责: 表单校验、异步生成边界、反馈遥测、驾驶舱表格视图
// ==========================================

pub mod advisory_api;
pub mod dashboard_api;
pub mod error;
pub mod feedback_api;
pub mod validator;

// 重导出核心类型
pub use advisory_api::{AdvisoryApi, StockAlertGenerator};
pub use dashboard_api::{DashboardApi, ForecastTable, InventoryTable, TableView};
pub use error::{ApiError, ApiResult, ValidationViolation};
pub use feedback_api::FeedbackApi;
pub use validator::AlertInputValidator;
