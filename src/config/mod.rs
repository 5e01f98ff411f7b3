// ==========================================
// 供应链驾驶舱 - 配置层
// ==========================================
// 职责: 引擎配置（校验阈值/规则表覆写/语言）与示例数据集
// 存储: JSON 文件
// ==========================================

pub mod config_manager;
pub mod engine_config;
pub mod sample_data;

pub use config_manager::{ConfigError, ConfigManager, CONFIG_PATH_ENV};
pub use engine_config::{EngineConfig, ValidationConfig};
pub use sample_data::{sample_alert_input, sample_forecasts, sample_inventory, DashboardDataset};
