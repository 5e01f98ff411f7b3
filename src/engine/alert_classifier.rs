// ==========================================
// 供应链驾驶舱 - 库存告警分类器
// ==========================================
// 职责: 按有序规则表把需求/库存信号映射为分级告警
// 输入: AlertInput (历史需求 + 当前库存文本)
// 输出: Vec<Alert>, 顺序 = 规则求值顺序
// 红线: 所有命中规则都输出（非首个命中即返回）; 无命中返回空序列
// ==========================================

use crate::domain::alert::{Alert, AlertInput, InputField};
use crate::domain::types::Severity;
use crate::engine::rules::{all_hold, wanted_tokens, Condition};
use crate::engine::signal::ParsedSignals;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

// ==========================================
// AlertRule - 告警规则
// ==========================================

/// 告警规则
///
/// 消息中的数量是与命中词元绑定的示意常量, 不是从输入中解析出的数值。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertRule {
    pub rule_id: String,
    pub conditions: Vec<Condition>,
    pub severity: Severity,
    pub product_ref: String,
    pub message: String,
}

impl AlertRule {
    fn to_alert(&self) -> Alert {
        Alert {
            severity: self.severity,
            product_ref: self.product_ref.clone(),
            message: self.message.clone(),
        }
    }
}

/// 默认告警规则表
pub fn default_alert_rules() -> Vec<AlertRule> {
    vec![
        AlertRule {
            rule_id: "ALERT_PRODUCT_A_150_UNITS".to_string(),
            conditions: vec![
                Condition::contains(InputField::HistoricalDemand, "Product A"),
                Condition::contains(InputField::CurrentInventory, "150 units"),
            ],
            severity: Severity::Critical,
            product_ref: "Product A".to_string(),
            message: "Only 150 units on hand against ~200 units/month of demand with a summer \
                      spike; stock will run out before a 14-day replenishment arrives."
                .to_string(),
        },
        AlertRule {
            rule_id: "ALERT_PRODUCT_B_80_UNITS".to_string(),
            conditions: vec![
                Condition::contains(InputField::HistoricalDemand, "Product B"),
                Condition::contains(InputField::CurrentInventory, "80 units"),
            ],
            severity: Severity::Warning,
            product_ref: "Product B".to_string(),
            message: "80 units on hand covers about two weeks of stable demand (~140 units/month); \
                      place an order within the 7-day lead time window."
                .to_string(),
        },
        AlertRule {
            rule_id: "ALERT_PRODUCT_C_200_UNITS".to_string(),
            conditions: vec![
                Condition::contains(InputField::HistoricalDemand, "Product C"),
                Condition::contains(InputField::CurrentInventory, "200 units"),
            ],
            severity: Severity::Info,
            product_ref: "Product C".to_string(),
            message: "200 units on hand is adequate for now; monitor closely ahead of the \
                      holiday peak given the 21-day lead time."
                .to_string(),
        },
    ]
}

// ==========================================
// AlertClassifier - 告警分类器
// ==========================================
#[derive(Debug, Clone)]
pub struct AlertClassifier {
    rules: Vec<AlertRule>,
}

impl AlertClassifier {
    /// 使用默认规则表
    pub fn new() -> Self {
        Self::with_rules(default_alert_rules())
    }

    /// 使用自定义规则表（顺序即求值顺序）
    pub fn with_rules(rules: Vec<AlertRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[AlertRule] {
        &self.rules
    }

    /// 告警分类
    ///
    /// 纯函数: 相同输入得到相同输出; 不修改输入。
    #[instrument(skip(self, input), fields(rule_count = self.rules.len()))]
    pub fn classify(&self, input: &AlertInput) -> Vec<Alert> {
        let signals = ParsedSignals::extract(
            input,
            wanted_tokens(self.rules.iter().map(|r| r.conditions.as_slice())),
        );

        let alerts: Vec<Alert> = self
            .rules
            .iter()
            .filter(|rule| {
                let hit = all_hold(&rule.conditions, &signals);
                if hit {
                    debug!(rule_id = %rule.rule_id, severity = %rule.severity, "告警规则命中");
                }
                hit
            })
            .map(AlertRule::to_alert)
            .collect();

        debug!(alert_count = alerts.len(), "告警分类完成");
        alerts
    }
}

impl Default for AlertClassifier {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> AlertInput {
        AlertInput::new(
            "Last 6 months sales: Product A (1200 units), Product B (850 units), Product C (1500 units).",
            "Summer peak for Product A.",
            "Product A: 14 days. Product B: 7 days. Product C: 21 days.",
            "Product A: 150 units. Product B: 80 units. Product C: 200 units.",
        )
    }

    #[test]
    fn test_all_matching_rules_fire_in_rule_order() {
        let alerts = AlertClassifier::new().classify(&sample_input());
        let severities: Vec<Severity> = alerts.iter().map(|a| a.severity).collect();
        assert_eq!(
            severities,
            vec![Severity::Critical, Severity::Warning, Severity::Info]
        );
    }

    #[test]
    fn test_no_match_yields_empty_sequence() {
        let input = AlertInput::new("nothing here", "none", "none", "none at all");
        assert!(AlertClassifier::new().classify(&input).is_empty());
    }

    #[test]
    fn test_output_order_follows_rules_not_severity() {
        let rules = vec![
            AlertRule {
                rule_id: "INFO_FIRST".to_string(),
                conditions: vec![Condition::contains(InputField::HistoricalDemand, "X")],
                severity: Severity::Info,
                product_ref: "X".to_string(),
                message: "info".to_string(),
            },
            AlertRule {
                rule_id: "CRITICAL_SECOND".to_string(),
                conditions: vec![Condition::contains(InputField::CurrentInventory, "0 units")],
                severity: Severity::Critical,
                product_ref: "X".to_string(),
                message: "critical".to_string(),
            },
        ];
        let input = AlertInput::new("X", "", "", "X: 0 units");
        let alerts = AlertClassifier::with_rules(rules).classify(&input);
        assert_eq!(alerts[0].severity, Severity::Info);
        assert_eq!(alerts[1].severity, Severity::Critical);
    }

    #[test]
    fn test_classify_is_idempotent() {
        let classifier = AlertClassifier::new();
        let input = sample_input();
        assert_eq!(classifier.classify(&input), classifier.classify(&input));
    }
}
