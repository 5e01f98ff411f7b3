// ==========================================
// 供应链驾驶舱 - 用户反馈 API
// ==========================================
// 职责: 记录对告警/补货建议的“有用/无用”反馈
// 红线: 反馈只做遥测, 不影响分类器; 接收方失败不影响调用方
// ==========================================

use std::sync::{Arc, Mutex};

use crate::api::error::{ApiError, ApiResult};
use crate::domain::types::FeedbackVerdict;
use crate::engine::events::{FeedbackEvent, FeedbackItemKind, FeedbackSink, TracingFeedbackSink};

/// 用户反馈 API
pub struct FeedbackApi {
    sink: Arc<dyn FeedbackSink>,
    log: Mutex<Vec<FeedbackEvent>>,
}

impl FeedbackApi {
    pub fn new(sink: Arc<dyn FeedbackSink>) -> Self {
        Self {
            sink,
            log: Mutex::new(Vec::new()),
        }
    }

    /// 记录一条反馈
    ///
    /// 事件先写入内存日志, 再发布到接收方; 发布失败只记警告。
    pub fn record(
        &self,
        item_kind: FeedbackItemKind,
        item_ref: &str,
        verdict: FeedbackVerdict,
    ) -> ApiResult<FeedbackEvent> {
        if item_ref.trim().is_empty() {
            return Err(ApiError::InvalidInput("反馈条目引用不能为空".to_string()));
        }

        let event = FeedbackEvent::new(item_kind, item_ref, verdict);
        self.log
            .lock()
            .map_err(|e| ApiError::InternalError(format!("反馈日志锁获取失败: {}", e)))?
            .push(event.clone());

        if let Err(e) = self.sink.publish(&event) {
            tracing::warn!(event_id = %event.event_id, "反馈发布失败: {}", e);
        }
        Ok(event)
    }

    /// 已记录的反馈（按记录顺序）
    pub fn events(&self) -> ApiResult<Vec<FeedbackEvent>> {
        self.log
            .lock()
            .map(|log| log.clone())
            .map_err(|e| ApiError::InternalError(format!("反馈日志锁获取失败: {}", e)))
    }
}

impl Default for FeedbackApi {
    fn default() -> Self {
        Self::new(Arc::new(TracingFeedbackSink))
    }
}
