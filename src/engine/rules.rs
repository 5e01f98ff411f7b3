// ==========================================
// 供应链驾驶舱 - 声明式规则条件
// ==========================================
// 职责: 规则 = (条件合取) → 结果, 条件以数据形式声明
// 红线: 规则之间相互独立, 不允许引用其他规则的输出
// ==========================================

use crate::domain::alert::InputField;
use crate::engine::signal::ParsedSignals;
use serde::{Deserialize, Serialize};

/// 单个规则条件
///
/// 目前只有词元包含判断; 数值阈值判断可作为新变体加入,
/// 不影响 classify/advise 的对外签名。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Condition {
    /// 字段文本包含词元
    Contains { field: InputField, token: String },
}

impl Condition {
    pub fn contains(field: InputField, token: impl Into<String>) -> Self {
        Condition::Contains {
            field,
            token: token.into(),
        }
    }

    /// 条件需要扫描的 (字段, 词元)
    pub fn wanted(&self) -> (InputField, &str) {
        match self {
            Condition::Contains { field, token } => (*field, token.as_str()),
        }
    }

    pub fn holds(&self, signals: &ParsedSignals) -> bool {
        match self {
            Condition::Contains { field, token } => signals.contains(*field, token),
        }
    }
}

/// 条件合取: 全部成立才命中; 空合取视为不命中
pub fn all_hold(conditions: &[Condition], signals: &ParsedSignals) -> bool {
    !conditions.is_empty() && conditions.iter().all(|c| c.holds(signals))
}

/// 收集一组规则关心的全部 (字段, 词元)
pub fn wanted_tokens<'r, I>(condition_sets: I) -> Vec<(InputField, &'r str)>
where
    I: IntoIterator<Item = &'r [Condition]>,
{
    condition_sets
        .into_iter()
        .flat_map(|set| set.iter().map(Condition::wanted))
        .collect()
}
