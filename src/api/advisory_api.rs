// ==========================================
// 供应链驾驶舱 - 库存告警 API
// ==========================================
// 职责: 表单校验 → 告警分类 + 补货建议 → 汇总报告
// 并发: 分类器与补货顾问在阻塞线程池上并行执行, 可被调用方取消
// 红线: 取消后结果直接丢弃, 不产生部分输出
// ==========================================

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::oneshot;
use tracing::{info, instrument};

use crate::api::error::{ApiError, ApiResult};
use crate::api::validator::AlertInputValidator;
use crate::config::engine_config::EngineConfig;
use crate::domain::alert::{AdvisoryReport, AlertInput};
use crate::engine::alert_classifier::AlertClassifier;
use crate::engine::reorder_advisor::ReorderAdvisor;

// ==========================================
// StockAlertGenerator Trait
// ==========================================
// 用途: 展示层调用的生成接口
// 实现者: AdvisoryApi
#[async_trait]
pub trait StockAlertGenerator: Send + Sync {
    /// 校验输入并生成告警与补货建议
    async fn generate_stock_alerts(&self, input: AlertInput) -> ApiResult<AdvisoryReport>;
}

// ==========================================
// AdvisoryApi
// ==========================================
pub struct AdvisoryApi {
    classifier: Arc<AlertClassifier>,
    advisor: Arc<ReorderAdvisor>,
    validator: AlertInputValidator,
}

impl AdvisoryApi {
    pub fn new(
        classifier: Arc<AlertClassifier>,
        advisor: Arc<ReorderAdvisor>,
        validator: AlertInputValidator,
    ) -> Self {
        Self {
            classifier,
            advisor,
            validator,
        }
    }

    /// 按配置构建（规则表覆写 + 校验阈值）
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(
            Arc::new(config.build_classifier()),
            Arc::new(config.build_advisor()),
            AlertInputValidator::new(config.validation),
        )
    }

    /// 同步生成（在调用线程上执行）
    pub fn generate(&self, input: &AlertInput) -> ApiResult<AdvisoryReport> {
        self.validator.validate(input)?;
        Ok(AdvisoryReport {
            alerts: self.classifier.classify(input),
            reorder: self.advisor.advise(input),
            generated_at: Utc::now(),
        })
    }

    /// 异步生成
    ///
    /// # 返回
    /// - Ok(AdvisoryReport): 告警 + 补货建议
    /// - Err(ApiError::ValidationError): 表单校验失败, 引擎未运行
    #[instrument(skip(self, input))]
    pub async fn generate_stock_alerts(&self, input: AlertInput) -> ApiResult<AdvisoryReport> {
        self.validator.validate(&input)?;

        let input = Arc::new(input);

        let classifier = Arc::clone(&self.classifier);
        let classify_input = Arc::clone(&input);
        let alerts_task =
            tokio::task::spawn_blocking(move || classifier.classify(&classify_input));

        let advisor = Arc::clone(&self.advisor);
        let advise_input = Arc::clone(&input);
        let reorder_task = tokio::task::spawn_blocking(move || advisor.advise(&advise_input));

        let (alerts, reorder) = futures::future::join(alerts_task, reorder_task).await;
        let report = AdvisoryReport {
            alerts: alerts?,
            reorder: reorder?,
            generated_at: Utc::now(),
        };

        info!(
            alert_count = report.alerts.len(),
            recommendation_count = report.reorder.recommendations.len(),
            "库存告警已生成"
        );
        Ok(report)
    }

    /// 可取消的异步生成
    ///
    /// `cancel` 收到信号时返回 `ApiError::Cancelled`; 发送端被丢弃不视为取消。
    /// 取消信号先于调用到达时直接取消。
    pub async fn generate_stock_alerts_cancellable(
        &self,
        input: AlertInput,
        cancel: oneshot::Receiver<()>,
    ) -> ApiResult<AdvisoryReport> {
        tokio::select! {
            biased;
            Ok(()) = cancel => {
                info!("库存告警生成已取消");
                Err(ApiError::Cancelled)
            }
            result = self.generate_stock_alerts(input) => result,
        }
    }
}

#[async_trait]
impl StockAlertGenerator for AdvisoryApi {
    async fn generate_stock_alerts(&self, input: AlertInput) -> ApiResult<AdvisoryReport> {
        AdvisoryApi::generate_stock_alerts(self, input).await
    }
}

impl Default for AdvisoryApi {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}
