// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持英文（默认）和中文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

use crate::domain::types::Severity;

/// 已提供翻译的语言
pub const SUPPORTED_LOCALES: [&str; 2] = ["en", "zh-CN"];

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言
///
/// 未提供翻译的语言回退为 "en"，并返回 false
pub fn set_locale(locale: &str) -> bool {
    if SUPPORTED_LOCALES.contains(&locale) {
        rust_i18n::set_locale(locale);
        true
    } else {
        tracing::warn!("不支持的语言: {}，回退为 en", locale);
        rust_i18n::set_locale("en");
        false
    }
}

/// 翻译消息（无参数）
///
/// # 示例
/// ```no_run
/// use supply_chain_dss::i18n::t;
/// let msg = t("common.success");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息（带参数）
///
/// # 示例
/// ```no_run
/// use supply_chain_dss::i18n::t_with_args;
/// let msg = t_with_args("validation.too_short", &[("field", "leadTimes"), ("min", "5")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

/// 告警严重度的本地化名称
pub fn severity_label(severity: Severity) -> String {
    t(severity.label_key())
}
