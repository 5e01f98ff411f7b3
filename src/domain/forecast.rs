// ==========================================
// 供应链驾驶舱 - 需求预测实体
// ==========================================
// 职责: 预测表行 + 可排序字段声明
// ==========================================

use crate::domain::types::{AccuracyBand, ForecastBias};
use crate::engine::sort::{FieldValue, SortableRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 月度历史销量
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySales {
    pub month: String,
    pub sales: u32,
}

/// 月度预测量
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyForecast {
    pub month: String,
    pub forecast: u32,
}

/// 预测表行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastProduct {
    pub sku: String,
    pub name: String,
    /// 预测误差 MAPE（%）
    pub accuracy: f64,
    /// 偏差方向, None 表示无明显偏差
    #[serde(default)]
    pub bias: Option<ForecastBias>,
    /// 当前预测量（件）
    pub current_forecast: u32,
    #[serde(default)]
    pub historical_data: Vec<MonthlySales>,
    #[serde(default)]
    pub forecast_data: Vec<MonthlyForecast>,
}

impl ForecastProduct {
    pub fn accuracy_band(&self) -> AccuracyBand {
        AccuracyBand::from_mape(self.accuracy)
    }

    /// 历史月均销量; 无历史数据时为 None
    pub fn average_monthly_sales(&self) -> Option<f64> {
        if self.historical_data.is_empty() {
            return None;
        }
        let total: u64 = self.historical_data.iter().map(|m| u64::from(m.sales)).sum();
        Some(total as f64 / self.historical_data.len() as f64)
    }
}

// ==========================================
// 可排序字段
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ForecastField {
    Sku,
    Name,
    Accuracy,
    Bias,
    CurrentForecast,
}

impl ForecastField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ForecastField::Sku => "sku",
            ForecastField::Name => "name",
            ForecastField::Accuracy => "accuracy",
            ForecastField::Bias => "bias",
            ForecastField::CurrentForecast => "currentForecast",
        }
    }
}

impl fmt::Display for ForecastField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ForecastField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "sku" => Ok(ForecastField::Sku),
            "name" => Ok(ForecastField::Name),
            "accuracy" => Ok(ForecastField::Accuracy),
            "bias" => Ok(ForecastField::Bias),
            "currentForecast" | "current_forecast" => Ok(ForecastField::CurrentForecast),
            other => Err(format!("unknown forecast field: {}", other)),
        }
    }
}

impl SortableRecord for ForecastProduct {
    type Field = ForecastField;

    fn field_value(&self, field: ForecastField) -> FieldValue<'_> {
        match field {
            ForecastField::Sku => FieldValue::Text(&self.sku),
            ForecastField::Name => FieldValue::Text(&self.name),
            ForecastField::Accuracy => FieldValue::Number(self.accuracy),
            // 偏差按文本比较, 无偏差的行与任何行相等
            ForecastField::Bias => match self.bias {
                Some(bias) => FieldValue::Text(bias.as_str()),
                None => FieldValue::Missing,
            },
            ForecastField::CurrentForecast => FieldValue::Number(f64::from(self.current_forecast)),
        }
    }
}
