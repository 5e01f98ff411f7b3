// ==========================================
// 供应链驾驶舱 - 补货顾问
// ==========================================
// 职责: 结合需求、季节性、库存信号给出补货数量与时机
// 输入: AlertInput
// 输出: ReorderAdvice (产品建议 + 固定通用建议)
// 红线: 同一产品可在不同季节条件下多次命中, 不去重
// ==========================================

use crate::domain::alert::{AlertInput, InputField, ReorderAdvice, ReorderRecommendation};
use crate::engine::rules::{all_hold, wanted_tokens, Condition};
use crate::engine::signal::ParsedSignals;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

// ==========================================
// ReorderRule - 补货规则
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderRule {
    pub rule_id: String,
    pub conditions: Vec<Condition>,
    pub product_ref: String,
    pub suggested_quantity: u32,
    pub lead_time_days: u32,
    pub rationale: String,
}

impl ReorderRule {
    fn to_recommendation(&self) -> ReorderRecommendation {
        ReorderRecommendation {
            product_ref: self.product_ref.clone(),
            suggested_quantity: self.suggested_quantity,
            lead_time_days: self.lead_time_days,
            rationale: self.rationale.clone(),
        }
    }
}

/// 默认补货规则表
pub fn default_reorder_rules() -> Vec<ReorderRule> {
    vec![
        ReorderRule {
            rule_id: "REORDER_PRODUCT_A_SUMMER_PEAK".to_string(),
            conditions: vec![
                Condition::contains(InputField::HistoricalDemand, "Product A"),
                Condition::contains(InputField::Seasonality, "Summer"),
                Condition::contains(InputField::CurrentInventory, "Product A: 150 units"),
            ],
            product_ref: "Product A".to_string(),
            suggested_quantity: 1000,
            lead_time_days: 14,
            rationale: "Summer peak expected; order now to cover peak-season demand through the \
                        14-day lead time."
                .to_string(),
        },
        ReorderRule {
            rule_id: "REORDER_PRODUCT_A_BASELINE".to_string(),
            conditions: vec![
                Condition::contains(InputField::HistoricalDemand, "Product A"),
                Condition::contains(InputField::CurrentInventory, "Product A: 150 units"),
            ],
            product_ref: "Product A".to_string(),
            suggested_quantity: 600,
            lead_time_days: 14,
            rationale: "Baseline replenishment: current stock is below three months of average \
                        demand."
                .to_string(),
        },
        ReorderRule {
            rule_id: "REORDER_PRODUCT_B_STABLE".to_string(),
            conditions: vec![
                Condition::contains(InputField::HistoricalDemand, "Product B"),
                Condition::contains(InputField::Seasonality, "stable"),
                Condition::contains(InputField::CurrentInventory, "Product B: 80 units"),
            ],
            product_ref: "Product B".to_string(),
            suggested_quantity: 400,
            lead_time_days: 7,
            rationale: "Stable year-round demand; restore roughly three months of cover."
                .to_string(),
        },
        ReorderRule {
            rule_id: "REORDER_PRODUCT_C_HOLIDAY".to_string(),
            conditions: vec![
                Condition::contains(InputField::HistoricalDemand, "Product C"),
                Condition::contains(InputField::Seasonality, "Holiday"),
            ],
            product_ref: "Product C".to_string(),
            suggested_quantity: 1200,
            lead_time_days: 21,
            rationale: "Build inventory ahead of the holiday season peak; the 21-day lead time \
                        requires ordering early."
                .to_string(),
        },
    ]
}

/// 默认通用建议（无产品归属, 每次附在末尾）
pub fn default_general_guidance() -> Vec<String> {
    vec![
        "Review safety stock levels for all products against recent demand variability."
            .to_string(),
        "Add a buffer to supplier lead times to absorb shipping delays.".to_string(),
        "Re-run this analysis weekly as new sales data arrives.".to_string(),
    ]
}

// ==========================================
// ReorderAdvisor - 补货顾问
// ==========================================
#[derive(Debug, Clone)]
pub struct ReorderAdvisor {
    rules: Vec<ReorderRule>,
    general_guidance: Vec<String>,
}

impl ReorderAdvisor {
    /// 使用默认规则表与通用建议
    pub fn new() -> Self {
        Self::with_rules(default_reorder_rules(), default_general_guidance())
    }

    pub fn with_rules(rules: Vec<ReorderRule>, general_guidance: Vec<String>) -> Self {
        Self {
            rules,
            general_guidance,
        }
    }

    pub fn rules(&self) -> &[ReorderRule] {
        &self.rules
    }

    pub fn general_guidance(&self) -> &[String] {
        &self.general_guidance
    }

    /// 生成补货建议
    ///
    /// 全函数: 无命中时 recommendations 为空, general_guidance 照常附带。
    #[instrument(skip(self, input), fields(rule_count = self.rules.len()))]
    pub fn advise(&self, input: &AlertInput) -> ReorderAdvice {
        let signals = ParsedSignals::extract(
            input,
            wanted_tokens(self.rules.iter().map(|r| r.conditions.as_slice())),
        );

        let recommendations: Vec<ReorderRecommendation> = self
            .rules
            .iter()
            .filter(|rule| all_hold(&rule.conditions, &signals))
            .inspect(|rule| debug!(rule_id = %rule.rule_id, "补货规则命中"))
            .map(ReorderRule::to_recommendation)
            .collect();

        debug!(
            recommendation_count = recommendations.len(),
            guidance_count = self.general_guidance.len(),
            "补货建议生成完成"
        );

        ReorderAdvice {
            recommendations,
            general_guidance: self.general_guidance.clone(),
        }
    }
}

impl Default for ReorderAdvisor {
    fn default() -> Self {
        Self::new()
    }
}
