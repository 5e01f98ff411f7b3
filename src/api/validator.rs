// ==========================================
// 供应链驾驶舱 - 告警表单校验器
// ==========================================
// 职责: 在核心引擎运行前校验四个输入字段的最小长度
// 红线: 校验失败时逐字段给出原因, 引擎不会被调用
// ==========================================

use crate::api::error::{ApiError, ApiResult, ValidationViolation};
use crate::config::engine_config::ValidationConfig;
use crate::domain::alert::{AlertInput, InputField};
use crate::i18n::t_with_args;

/// 告警表单校验器
#[derive(Debug, Clone, Default)]
pub struct AlertInputValidator {
    config: ValidationConfig,
}

impl AlertInputValidator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// 收集全部违规（不提前返回）
    pub fn violations(&self, input: &AlertInput) -> Vec<ValidationViolation> {
        InputField::ALL
            .iter()
            .filter_map(|&field| {
                let min_length = self.config.min_length(field);
                let actual_length = input.field(field).chars().count();
                if actual_length >= min_length {
                    return None;
                }
                Some(ValidationViolation {
                    field,
                    min_length,
                    actual_length,
                    reason: t_with_args(
                        "validation.too_short",
                        &[
                            ("field", field.as_str()),
                            ("min", &min_length.to_string()),
                            ("actual", &actual_length.to_string()),
                        ],
                    ),
                })
            })
            .collect()
    }

    /// 校验表单
    ///
    /// # 返回
    /// - Ok(()): 校验通过
    /// - Err(ApiError::ValidationError): 至少一个字段过短
    pub fn validate(&self, input: &AlertInput) -> ApiResult<()> {
        let violations = self.violations(input);
        if violations.is_empty() {
            return Ok(());
        }

        tracing::warn!(
            count = violations.len(),
            fields = ?violations.iter().map(|v| v.field.as_str()).collect::<Vec<_>>(),
            "告警表单校验失败"
        );
        Err(ApiError::ValidationError {
            reason: t_with_args(
                "validation.invalid_input",
                &[("count", &violations.len().to_string())],
            ),
            violations,
        })
    }
}
