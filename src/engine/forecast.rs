// ==========================================
// 供应链驾驶舱 - 预测人工覆写
// ==========================================
// 职责: 预测表的人工覆写值管理（仅内存, 不持久化）
// 规则: 取输入开头的数值前缀（"1600 units" → 1600）; 没有数值前缀时清除该 SKU 的覆写
// ==========================================

use crate::domain::forecast::ForecastProduct;
use std::collections::BTreeMap;
use tracing::debug;

/// 人工覆写表 (sku -> 覆写预测量)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastOverrides {
    values: BTreeMap<String, f64>,
}

impl ForecastOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// 处理输入框文本
    ///
    /// # 返回
    /// - Some(value): 覆写已设置
    /// - None: 文本开头没有有限数值, 覆写已清除
    pub fn apply_input(&mut self, sku: &str, raw: &str) -> Option<f64> {
        match leading_number(raw) {
            Some(value) if value.is_finite() => {
                debug!(sku = sku, value = value, "设置预测覆写");
                self.values.insert(sku.to_string(), value);
                Some(value)
            }
            _ => {
                if self.values.remove(sku).is_some() {
                    debug!(sku = sku, "清除预测覆写");
                }
                None
            }
        }
    }

    pub fn get(&self, sku: &str) -> Option<f64> {
        self.values.get(sku).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 生效预测量: 有覆写用覆写, 否则用系统预测
    pub fn effective_forecast(&self, product: &ForecastProduct) -> f64 {
        self.get(&product.sku)
            .unwrap_or_else(|| f64::from(product.current_forecast))
    }
}

/// 文本开头最长的十进制数前缀（忽略前导空白, 其后内容忽略）
///
/// 接受 `[+-]digits[.digits][e[+-]digits]`, 整数部分与小数部分至少有一个非空。
fn leading_number(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let digits = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_len = digits(end);
    end += int_len;

    let mut frac_len = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_len = digits(end + 1);
        if int_len > 0 || frac_len > 0 {
            end += 1 + frac_len;
        }
    }
    if int_len == 0 && frac_len == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_len = digits(exp_end);
        if exp_len > 0 {
            end = exp_end + exp_len;
        }
    }

    text[..end].parse::<f64>().ok()
}
