// ==========================================
// 供应链驾驶舱 - 示例数据集
// ==========================================
// 职责: 驾驶舱演示用的库存/预测数据与告警表单预填内容
// 说明: 以可注入数据集提供, 不作为进程级全局状态; 可从 JSON 文件替换
// ==========================================

use crate::config::config_manager::ConfigError;
use crate::domain::alert::AlertInput;
use crate::domain::forecast::{ForecastProduct, MonthlyForecast, MonthlySales};
use crate::domain::inventory::InventoryItem;
use crate::domain::types::{ForecastBias, StockStatus};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 驾驶舱数据集
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DashboardDataset {
    pub inventory: Vec<InventoryItem>,
    pub forecasts: Vec<ForecastProduct>,
}

impl DashboardDataset {
    /// 内置示例数据
    pub fn sample() -> Self {
        Self {
            inventory: sample_inventory(),
            forecasts: sample_forecasts(),
        }
    }

    /// 从 JSON 文件加载
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let path_str = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path_str.clone(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path_str,
            source,
        })
    }
}

/// 告警表单预填内容
pub fn sample_alert_input() -> AlertInput {
    AlertInput::new(
        "Last 6 months sales: Product A (1200 units), Product B (850 units), Product C (1500 units). \
         Spike in Product A during summer.",
        "Summer peak for Product A. Holiday season peak for Product C. \
         Product B has stable demand year-round.",
        "Product A: 14 days. Product B: 7 days. Product C: 21 days.",
        "Product A: 150 units. Product B: 80 units. Product C: 200 units.",
    )
}

fn inventory_item(
    id: &str,
    name: &str,
    status: StockStatus,
    level: u32,
    reorder_point: u32,
    lead_time: &str,
) -> InventoryItem {
    InventoryItem {
        id: id.to_string(),
        name: name.to_string(),
        status,
        level,
        reorder_point,
        lead_time: lead_time.to_string(),
    }
}

/// 示例库存表
pub fn sample_inventory() -> Vec<InventoryItem> {
    vec![
        inventory_item(
            "SKU-001",
            "Quantum Stabilizer",
            StockStatus::InStock,
            250,
            100,
            "14 days",
        ),
        inventory_item(
            "SKU-002",
            "Hyper-Drive Coolant",
            StockStatus::LowStock,
            45,
            50,
            "7 days",
        ),
        inventory_item(
            "SKU-003",
            "Plasma Injector",
            StockStatus::InStock,
            600,
            200,
            "21 days",
        ),
        inventory_item(
            "SKU-004",
            "Gravity Plating",
            StockStatus::OutOfStock,
            0,
            75,
            "10 days",
        ),
        inventory_item(
            "SKU-005",
            "Neutrino Sensor",
            StockStatus::InStock,
            120,
            80,
            "12 days",
        ),
    ]
}

const HISTORY_MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];
const FORECAST_MONTHS: [&str; 3] = ["Jul", "Aug", "Sep"];

fn forecast_product(
    sku: &str,
    name: &str,
    accuracy: f64,
    bias: Option<ForecastBias>,
    current_forecast: u32,
    history: [u32; 6],
) -> ForecastProduct {
    ForecastProduct {
        sku: sku.to_string(),
        name: name.to_string(),
        accuracy,
        bias,
        current_forecast,
        historical_data: HISTORY_MONTHS
            .iter()
            .zip(history)
            .map(|(month, sales)| MonthlySales {
                month: month.to_string(),
                sales,
            })
            .collect(),
        forecast_data: FORECAST_MONTHS
            .iter()
            .map(|month| MonthlyForecast {
                month: month.to_string(),
                forecast: current_forecast,
            })
            .collect(),
    }
}

/// 示例预测表
pub fn sample_forecasts() -> Vec<ForecastProduct> {
    vec![
        forecast_product(
            "SKU-001",
            "Widget A",
            12.0,
            Some(ForecastBias::Over),
            1500,
            [1200, 1350, 1420, 1380, 1450, 1520],
        ),
        forecast_product(
            "SKU-002",
            "Widget B",
            25.0,
            Some(ForecastBias::Under),
            2200,
            [1800, 1950, 2100, 2050, 2150, 2200],
        ),
        forecast_product(
            "SKU-003",
            "Gadget Pro",
            8.0,
            None,
            800,
            [750, 780, 820, 790, 810, 800],
        ),
        forecast_product(
            "SKU-004",
            "Gizmo Plus",
            35.0,
            Some(ForecastBias::Over),
            3100,
            [2800, 2950, 3100, 3050, 3150, 3100],
        ),
    ]
}
