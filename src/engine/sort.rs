// ==========================================
// 供应链驾驶舱 - 通用表格排序控制器
// ==========================================
// 职责: 所有可排序表格共用的字段选择状态机 + 稳定比较排序
// 输入: 同构记录集合 + 排序配置
// 输出: 新的有序序列（不修改输入）
// 红线: 排序必须稳定; 类型不一致视为相等, 不报错
// ==========================================

use crate::domain::types::RankedEnum;
use icu_collator::{Collator, CollatorOptions, Strength};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, warn};

// ==========================================
// 排序方向
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// 反转方向
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// 将升序比较结果按方向调整
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

// ==========================================
// 排序配置
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F> SortConfig<F> {
    pub fn ascending(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Descending,
        }
    }
}

// ==========================================
// 字段值
// ==========================================

/// 记录在某个字段上的可比较值
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// 字符串: 按区域感知的字典序比较
    Text(&'a str),
    /// 数值: 按数值差比较
    Number(f64),
    /// 有界枚举: 按显式声明的排序位置比较
    Ranked(u8),
    /// 空值或不支持排序的字段
    Missing,
}

impl<'a> FieldValue<'a> {
    pub fn ranked<E: RankedEnum>(value: E) -> Self {
        FieldValue::Ranked(value.rank())
    }
}

/// 可排序记录
///
/// 每种表格行类型声明自己的字段枚举, 并把字段映射为 `FieldValue`。
/// 枚举字段的排序位置来自该枚举类型自身的 `RankedEnum` 实现。
pub trait SortableRecord {
    type Field: Copy + PartialEq;

    fn field_value(&self, field: Self::Field) -> FieldValue<'_>;
}

// ==========================================
// 比较函数
// ==========================================

/// 比较两个字段值（升序语义）
///
/// 类型不一致、缺失值、NaN 一律视为相等。
pub fn compare_values(a: FieldValue<'_>, b: FieldValue<'_>) -> Ordering {
    match (a, b) {
        (FieldValue::Text(x), FieldValue::Text(y)) => locale_compare(x, y),
        (FieldValue::Number(x), FieldValue::Number(y)) => {
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (FieldValue::Ranked(x), FieldValue::Ranked(y)) => x.cmp(&y),
        _ => Ordering::Equal,
    }
}

thread_local! {
    /// CLDR 根区域排序器（三级强度: 基础字母 → 重音 → 大小写）
    static COLLATOR: Option<Collator> = build_collator();
}

fn build_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);
    match Collator::try_new(&Default::default(), options) {
        Ok(collator) => Some(collator),
        Err(e) => {
            warn!("排序器初始化失败，退回大小写折叠比较: {}", e);
            None
        }
    }
}

/// 区域感知的字符串比较
///
/// 使用 Unicode 排序算法: 重音字母与基础字母相邻（"Éclair" 位于 "Fan" 之前）,
/// 同一单词小写在前（"alpha" < "Alpha"）。排序器相等时再按原文比较, 保证结果确定。
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let collated = COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a
            .chars()
            .flat_map(char::to_lowercase)
            .cmp(b.chars().flat_map(char::to_lowercase)),
    });
    collated.then_with(|| a.cmp(b))
}

// ==========================================
// 排序操作
// ==========================================

/// 按配置排序, 返回新序列
///
/// - `config` 为 None 时保持插入顺序
/// - 相等记录保持输入中的相对顺序（升序、降序均如此）
pub fn order<T>(records: &[T], config: Option<&SortConfig<T::Field>>) -> Vec<T>
where
    T: SortableRecord + Clone,
{
    order_refs(records, config).into_iter().cloned().collect()
}

/// 同 `order`, 但返回引用, 避免克隆大记录
pub fn order_refs<'r, T>(records: &'r [T], config: Option<&SortConfig<T::Field>>) -> Vec<&'r T>
where
    T: SortableRecord,
{
    let refs: Vec<&T> = records.iter().collect();
    let Some(config) = config else {
        return refs;
    };

    let field = config.field;
    let direction = config.direction;
    let mut cmp = |a: &&T, b: &&T| {
        direction.apply(compare_values(a.field_value(field), b.field_value(field)))
    };

    let sorted = stable_merge_sort(refs, &mut cmp);
    debug!(count = sorted.len(), direction = direction.as_str(), "表格排序完成");
    sorted
}

/// 稳定归并排序
///
/// 比较器在类型不一致时返回 Equal, 不构成全序;
/// 标准库 `sort_by` 对非全序比较器可能 panic, 这里自行归并。
fn stable_merge_sort<T, C>(mut items: Vec<T>, cmp: &mut C) -> Vec<T>
where
    C: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }

    let right = items.split_off(items.len() / 2);
    let left = stable_merge_sort(items, cmp);
    let right = stable_merge_sort(right, cmp);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        // 只有右侧严格更小时才取右侧, 相等取左侧 => 稳定
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => cmp(r, l) == Ordering::Less,
            _ => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }
    merged.extend(left);
    merged.extend(right);
    merged
}

// ==========================================
// SortController - 字段选择状态机
// ==========================================

/// 表格排序状态
///
/// 两个隐式状态: 未排序（无配置）/ 已排序（有配置）。
/// 只能通过 `select_field` 迁移。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortController<F> {
    config: Option<SortConfig<F>>,
}

impl<F: Copy + PartialEq> SortController<F> {
    /// 初始为未排序状态
    pub fn new() -> Self {
        Self { config: None }
    }

    /// 选择排序字段
    ///
    /// - 当前无配置或字段不同 → {field, 升序}
    /// - 字段相同 → 方向反转
    pub fn select_field(&mut self, field: F) -> SortConfig<F> {
        let next = match self.config {
            Some(current) if current.field == field => SortConfig {
                field,
                direction: current.direction.toggled(),
            },
            _ => SortConfig::ascending(field),
        };
        self.config = Some(next);
        next
    }

    /// 当前排序配置
    pub fn config(&self) -> Option<&SortConfig<F>> {
        self.config.as_ref()
    }

    /// 指定字段当前是否处于激活状态, 返回其方向
    pub fn direction_of(&self, field: F) -> Option<SortDirection> {
        self.config
            .filter(|c| c.field == field)
            .map(|c| c.direction)
    }

    /// 按当前状态排序
    pub fn order<T>(&self, records: &[T]) -> Vec<T>
    where
        T: SortableRecord<Field = F> + Clone,
    {
        order(records, self.config.as_ref())
    }
}

impl<F: Copy + PartialEq> Default for SortController<F> {
    fn default() -> Self {
        Self::new()
    }
}
