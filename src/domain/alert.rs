// ==========================================
// 供应链驾驶舱 - 告警与补货建议实体
// ==========================================
// 职责: 定义告警输入、告警、补货建议
// 生命周期: 每次调用新建, 不落库
// ==========================================

use crate::domain::types::Severity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// AlertInput - 告警输入
// ==========================================

/// 告警输入（四段自由文本）
///
/// 分类器只把这些文本当作弱结构化证据, 不假设可机读。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertInput {
    /// 历史需求描述
    pub historical_demand_data: String,
    /// 季节性描述
    pub seasonality_data: String,
    /// 补货提前期描述
    pub lead_times: String,
    /// 当前库存描述
    pub current_inventory_levels: String,
}

impl AlertInput {
    pub fn new(
        historical_demand_data: impl Into<String>,
        seasonality_data: impl Into<String>,
        lead_times: impl Into<String>,
        current_inventory_levels: impl Into<String>,
    ) -> Self {
        Self {
            historical_demand_data: historical_demand_data.into(),
            seasonality_data: seasonality_data.into(),
            lead_times: lead_times.into(),
            current_inventory_levels: current_inventory_levels.into(),
        }
    }

    /// 按字段取文本
    pub fn field(&self, field: InputField) -> &str {
        match field {
            InputField::HistoricalDemand => &self.historical_demand_data,
            InputField::Seasonality => &self.seasonality_data,
            InputField::LeadTimes => &self.lead_times,
            InputField::CurrentInventory => &self.current_inventory_levels,
        }
    }
}

// ==========================================
// InputField - 输入字段标识
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    HistoricalDemand,
    Seasonality,
    LeadTimes,
    CurrentInventory,
}

impl InputField {
    pub const ALL: [InputField; 4] = [
        InputField::HistoricalDemand,
        InputField::Seasonality,
        InputField::LeadTimes,
        InputField::CurrentInventory,
    ];

    /// 对外字段名（与序列化格式一致）
    pub fn as_str(&self) -> &'static str {
        match self {
            InputField::HistoricalDemand => "historicalDemandData",
            InputField::Seasonality => "seasonalityData",
            InputField::LeadTimes => "leadTimes",
            InputField::CurrentInventory => "currentInventoryLevels",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// Alert - 库存告警
// ==========================================

/// 库存告警
///
/// 输出序列按规则求值顺序排列, 不按严重度排序。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub severity: Severity,
    pub product_ref: String,
    pub message: String,
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.severity.as_str().to_uppercase(),
            self.product_ref,
            self.message
        )
    }
}

// ==========================================
// ReorderRecommendation - 补货建议
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderRecommendation {
    pub product_ref: String,
    pub suggested_quantity: u32,
    pub lead_time_days: u32,
    pub rationale: String,
}

impl fmt::Display for ReorderRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: reorder {} units (lead time {} days). {}",
            self.product_ref, self.suggested_quantity, self.lead_time_days, self.rationale
        )
    }
}

// ==========================================
// ReorderAdvice - 补货建议集合
// ==========================================

/// 补货顾问输出
///
/// `recommendations` 为命中规则按顺序产生的建议（不去重）,
/// `general_guidance` 为无产品归属的通用建议, 每次都附在末尾。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderAdvice {
    pub recommendations: Vec<ReorderRecommendation>,
    pub general_guidance: Vec<String>,
}

impl ReorderAdvice {
    /// 按展示顺序输出文本行: 产品建议在前, 通用建议在后
    pub fn lines(&self) -> Vec<String> {
        self.recommendations
            .iter()
            .map(|r| r.to_string())
            .chain(self.general_guidance.iter().cloned())
            .collect()
    }
}

// ==========================================
// AdvisoryReport - 告警 + 补货建议
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryReport {
    pub alerts: Vec<Alert>,
    pub reorder: ReorderAdvice,
    pub generated_at: DateTime<Utc>,
}

impl AdvisoryReport {
    /// 告警文本块（每条一行）
    pub fn stock_alerts_text(&self) -> String {
        self.alerts
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// 补货建议文本块（每条一行）
    pub fn reorder_suggestions_text(&self) -> String {
        self.reorder.lines().join("\n")
    }
}
