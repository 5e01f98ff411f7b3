// ==========================================
// 供应链驾驶舱 - 领域类型定义
// ==========================================
// 职责: 告警等级、库存状态、预测偏差等枚举
// 红线: 枚举排序使用显式声明的业务顺序,不使用显示文本的字典序
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 枚举排序声明 (Ranked Enum)
// ==========================================

/// 有界枚举的显式排序声明
///
/// 表格排序遇到枚举字段时只比较 `rank()`,
/// 因此 "critical" 不会因为字母序排到 "info" 前面。
pub trait RankedEnum: Copy {
    /// 业务顺序中的位置（越小越靠前）
    fn rank(&self) -> u8;
}

// ==========================================
// 告警等级 (Severity)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical, // 立即处理
    Warning,  // 需要关注
    Info,     // 提示
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    /// i18n 键
    pub fn label_key(&self) -> &'static str {
        match self {
            Severity::Critical => "severity.critical",
            Severity::Warning => "severity.warning",
            Severity::Info => "severity.info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl RankedEnum for Severity {
    fn rank(&self) -> u8 {
        match self {
            Severity::Info => 1,
            Severity::Warning => 2,
            Severity::Critical => 3,
        }
    }
}

// ==========================================
// 库存状态 (Stock Status)
// ==========================================
// 顺序: InStock < LowStock < OutOfStock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl StockStatus {
    /// 由库存水位与再订货点推导状态
    ///
    /// - level == 0 → OutOfStock
    /// - level < reorder_point → LowStock
    /// - 其他 → InStock
    pub fn derive(level: u32, reorder_point: u32) -> Self {
        if level == 0 {
            StockStatus::OutOfStock
        } else if level < reorder_point {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    /// 显示文本
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl RankedEnum for StockStatus {
    fn rank(&self) -> u8 {
        match self {
            StockStatus::InStock => 1,
            StockStatus::LowStock => 2,
            StockStatus::OutOfStock => 3,
        }
    }
}

// ==========================================
// 预测偏差 (Forecast Bias)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForecastBias {
    Over,  // 预测偏高
    Under, // 预测偏低
}

impl ForecastBias {
    pub fn as_str(&self) -> &'static str {
        match self {
            ForecastBias::Over => "over",
            ForecastBias::Under => "under",
        }
    }
}

impl fmt::Display for ForecastBias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 预测准确度分档 (Accuracy Band)
// ==========================================
// 依据 MAPE: <=15 良好, <=25 一般, 其余较差
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccuracyBand {
    Good,
    Fair,
    Poor,
}

impl AccuracyBand {
    pub const GOOD_MAX_MAPE: f64 = 15.0;
    pub const FAIR_MAX_MAPE: f64 = 25.0;

    /// 按 MAPE 百分比分档
    pub fn from_mape(mape_pct: f64) -> Self {
        if mape_pct <= Self::GOOD_MAX_MAPE {
            AccuracyBand::Good
        } else if mape_pct <= Self::FAIR_MAX_MAPE {
            AccuracyBand::Fair
        } else {
            AccuracyBand::Poor
        }
    }
}

// ==========================================
// 用户反馈 (Feedback Verdict)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackVerdict {
    Helpful,
    NotHelpful,
}

impl FeedbackVerdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackVerdict::Helpful => "helpful",
            FeedbackVerdict::NotHelpful => "not_helpful",
        }
    }
}

impl std::str::FromStr for FeedbackVerdict {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "helpful" | "up" => Ok(FeedbackVerdict::Helpful),
            "not_helpful" | "not-helpful" | "down" => Ok(FeedbackVerdict::NotHelpful),
            other => Err(format!("unknown feedback verdict: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_status_derive() {
        assert_eq!(StockStatus::derive(0, 75), StockStatus::OutOfStock);
        assert_eq!(StockStatus::derive(45, 50), StockStatus::LowStock);
        assert_eq!(StockStatus::derive(250, 100), StockStatus::InStock);
        // 恰好等于再订货点不算低库存
        assert_eq!(StockStatus::derive(50, 50), StockStatus::InStock);
    }

    #[test]
    fn test_ranked_enum_order_is_not_alphabetical() {
        assert!(StockStatus::InStock.rank() < StockStatus::LowStock.rank());
        assert!(StockStatus::LowStock.rank() < StockStatus::OutOfStock.rank());

        // 字母序: critical < info < warning; 业务顺序: info < warning < critical
        assert!(Severity::Critical.as_str() < Severity::Info.as_str());
        assert!(Severity::Critical.rank() > Severity::Info.rank());
    }

    #[test]
    fn test_stock_status_serde_labels() {
        let json = serde_json::to_string(&StockStatus::OutOfStock).unwrap();
        assert_eq!(json, "\"Out of Stock\"");
        let parsed: StockStatus = serde_json::from_str("\"Low Stock\"").unwrap();
        assert_eq!(parsed, StockStatus::LowStock);
    }

    #[test]
    fn test_accuracy_band_boundaries() {
        assert_eq!(AccuracyBand::from_mape(8.0), AccuracyBand::Good);
        assert_eq!(AccuracyBand::from_mape(15.0), AccuracyBand::Good);
        assert_eq!(AccuracyBand::from_mape(25.0), AccuracyBand::Fair);
        assert_eq!(AccuracyBand::from_mape(35.0), AccuracyBand::Poor);
    }

    #[test]
    fn test_feedback_verdict_from_str() {
        assert_eq!("helpful".parse::<FeedbackVerdict>(), Ok(FeedbackVerdict::Helpful));
        assert_eq!(" Not-Helpful ".parse::<FeedbackVerdict>(), Ok(FeedbackVerdict::NotHelpful));
        assert!("meh".parse::<FeedbackVerdict>().is_err());
    }
}
