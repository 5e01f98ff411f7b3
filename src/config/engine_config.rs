// ==========================================
// 供应链驾驶舱 - 引擎配置
// ==========================================
// 职责: 校验阈值、规则表覆写、语言设置
// 格式: JSON, 缺省字段取默认值
// ==========================================

use crate::domain::alert::InputField;
use crate::engine::alert_classifier::{AlertClassifier, AlertRule};
use crate::engine::reorder_advisor::{
    default_general_guidance, default_reorder_rules, ReorderAdvisor, ReorderRule,
};
use serde::{Deserialize, Serialize};

/// 引擎配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// 界面语言（"en" 或 "zh-CN"）
    pub locale: String,

    /// 输入校验阈值
    pub validation: ValidationConfig,

    /// 告警规则表覆写（None 表示使用默认规则）
    pub alert_rules: Option<Vec<AlertRule>>,

    /// 补货规则表覆写
    pub reorder_rules: Option<Vec<ReorderRule>>,

    /// 通用建议覆写
    pub general_guidance: Option<Vec<String>>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            validation: ValidationConfig::default(),
            alert_rules: None,
            reorder_rules: None,
            general_guidance: None,
        }
    }
}

impl EngineConfig {
    /// 按配置构建告警分类器
    pub fn build_classifier(&self) -> AlertClassifier {
        match &self.alert_rules {
            Some(rules) => AlertClassifier::with_rules(rules.clone()),
            None => AlertClassifier::new(),
        }
    }

    /// 按配置构建补货顾问
    pub fn build_advisor(&self) -> ReorderAdvisor {
        let rules = self
            .reorder_rules
            .clone()
            .unwrap_or_else(default_reorder_rules);
        let guidance = self
            .general_guidance
            .clone()
            .unwrap_or_else(default_general_guidance);
        ReorderAdvisor::with_rules(rules, guidance)
    }
}

/// 输入最小长度（按字符计）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub historical_demand_min_len: usize,
    pub seasonality_min_len: usize,
    pub lead_times_min_len: usize,
    pub current_inventory_min_len: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            historical_demand_min_len: 10,
            seasonality_min_len: 10,
            lead_times_min_len: 5,
            current_inventory_min_len: 10,
        }
    }
}

impl ValidationConfig {
    pub fn min_length(&self, field: InputField) -> usize {
        match field {
            InputField::HistoricalDemand => self.historical_demand_min_len,
            InputField::Seasonality => self.seasonality_min_len,
            InputField::LeadTimes => self.lead_times_min_len,
            InputField::CurrentInventory => self.current_inventory_min_len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::rules::Condition;
    use crate::domain::types::Severity;

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"validation": {"lead_times_min_len": 3}}"#).unwrap();
        assert_eq!(config.locale, "en");
        assert_eq!(config.validation.lead_times_min_len, 3);
        assert_eq!(config.validation.historical_demand_min_len, 10);
        assert!(config.alert_rules.is_none());
    }

    #[test]
    fn test_build_classifier_uses_override() {
        let config = EngineConfig {
            alert_rules: Some(vec![AlertRule {
                rule_id: "ONLY".to_string(),
                conditions: vec![Condition::contains(InputField::CurrentInventory, "0 units")],
                severity: Severity::Critical,
                product_ref: "Gravity Plating".to_string(),
                message: "out of stock".to_string(),
            }]),
            ..EngineConfig::default()
        };
        let classifier = config.build_classifier();
        assert_eq!(classifier.rules().len(), 1);
        assert_eq!(classifier.rules()[0].rule_id, "ONLY");
    }

    #[test]
    fn test_build_advisor_defaults() {
        let advisor = EngineConfig::default().build_advisor();
        assert_eq!(advisor.rules(), default_reorder_rules().as_slice());
        assert_eq!(advisor.general_guidance(), default_general_guidance().as_slice());
    }
}
