// ==========================================
// 供应链驾驶舱 - 信号解析器
// ==========================================
// 职责: 从自由文本中提取"是否包含某个词元"的事实
// 规则: 精确子串匹配, 不做大小写/标点归一化
// 说明: 结构化数据接入之前的占位实现, 只要求确定且全函数
// ==========================================

use crate::domain::alert::{AlertInput, InputField};
use std::collections::{BTreeMap, BTreeSet};

/// 返回 `tokens` 中作为子串出现在 `text` 里的那部分
///
/// 无匹配时返回空集合, 永不失败。
pub fn parse<'t, I>(text: &str, tokens: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'t str>,
{
    tokens
        .into_iter()
        .filter(|token| text.contains(*token))
        .map(str::to_string)
        .collect()
}

// ==========================================
// ParsedSignals - 按字段汇总的命中词元
// ==========================================

/// 一次输入在各字段上命中的词元
///
/// 规则表先声明自己关心的 (字段, 词元), 解析器只扫描这些词元。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSignals {
    hits: BTreeMap<InputField, BTreeSet<String>>,
}

impl ParsedSignals {
    /// 针对给定的 (字段, 词元) 需求扫描输入
    pub fn extract<'t, I>(input: &AlertInput, wanted: I) -> Self
    where
        I: IntoIterator<Item = (InputField, &'t str)>,
    {
        let mut wanted_by_field: BTreeMap<InputField, Vec<&'t str>> = BTreeMap::new();
        for (field, token) in wanted {
            wanted_by_field.entry(field).or_default().push(token);
        }

        let hits = wanted_by_field
            .into_iter()
            .map(|(field, tokens)| (field, parse(input.field(field), tokens)))
            .collect();

        Self { hits }
    }

    /// 字段中是否出现该词元
    pub fn contains(&self, field: InputField, token: &str) -> bool {
        self.hits
            .get(&field)
            .map(|set| set.contains(token))
            .unwrap_or(false)
    }

    /// 命中词元总数
    pub fn hit_count(&self) -> usize {
        self.hits.values().map(BTreeSet::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact_substring() {
        let text = "Product A: 150 units. Product B: 80 units.";
        let hits = parse(text, ["Product A", "150 units", "Product C"]);
        assert_eq!(
            hits.into_iter().collect::<Vec<_>>(),
            vec!["150 units".to_string(), "Product A".to_string()]
        );
    }

    #[test]
    fn test_parse_no_normalization() {
        let hits = parse("product a: 150 UNITS", ["Product A", "150 units"]);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_parse_empty_inputs() {
        assert!(parse("", ["Product A"]).is_empty());
        assert!(parse("anything", std::iter::empty()).is_empty());
    }

    #[test]
    fn test_extract_signals_per_field() {
        let input = AlertInput::new(
            "Spike in Product A during summer.",
            "Summer peak for Product A.",
            "Product A: 14 days.",
            "Product A: 150 units.",
        );
        let signals = ParsedSignals::extract(
            &input,
            [
                (InputField::HistoricalDemand, "Product A"),
                (InputField::Seasonality, "Summer"),
                (InputField::CurrentInventory, "150 units"),
                (InputField::CurrentInventory, "80 units"),
            ],
        );

        assert!(signals.contains(InputField::HistoricalDemand, "Product A"));
        assert!(signals.contains(InputField::Seasonality, "Summer"));
        assert!(signals.contains(InputField::CurrentInventory, "150 units"));
        assert!(!signals.contains(InputField::CurrentInventory, "80 units"));
        // 未声明的 (字段, 词元) 不会被扫描
        assert!(!signals.contains(InputField::LeadTimes, "14 days"));
        assert_eq!(signals.hit_count(), 3);
    }
}
