// ==========================================
// 供应链驾驶舱 - 用户反馈事件
// ==========================================
// 职责: 定义反馈事件与发布 trait，实现依赖倒置
// 说明: 反馈只做遥测记录, 不回流到分类器（无在线学习）
// ==========================================

use crate::domain::types::FeedbackVerdict;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use uuid::Uuid;

// ==========================================
// 反馈对象类型
// ==========================================

/// 被评价的条目类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackItemKind {
    /// 库存告警
    Alert,
    /// 产品补货建议
    Recommendation,
    /// 通用建议
    Guidance,
}

impl FeedbackItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackItemKind::Alert => "alert",
            FeedbackItemKind::Recommendation => "recommendation",
            FeedbackItemKind::Guidance => "guidance",
        }
    }
}

/// 反馈事件
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackEvent {
    pub event_id: String,
    pub item_kind: FeedbackItemKind,
    /// 条目引用（产品名或通用建议序号）
    pub item_ref: String,
    pub verdict: FeedbackVerdict,
    pub recorded_at: DateTime<Utc>,
}

impl FeedbackEvent {
    pub fn new(
        item_kind: FeedbackItemKind,
        item_ref: impl Into<String>,
        verdict: FeedbackVerdict,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4().to_string(),
            item_kind,
            item_ref: item_ref.into(),
            verdict,
            recorded_at: Utc::now(),
        }
    }
}

// ==========================================
// 反馈发布 Trait
// ==========================================

/// 反馈事件接收方
///
/// 展示层只依赖此 trait; 具体落地（日志/外部遥测）由实现决定。
pub trait FeedbackSink: Send + Sync {
    fn publish(&self, event: &FeedbackEvent) -> Result<(), Box<dyn Error + Send + Sync>>;
}

/// 写入 tracing 日志的接收方
#[derive(Debug, Clone, Default)]
pub struct TracingFeedbackSink;

impl FeedbackSink for TracingFeedbackSink {
    fn publish(&self, event: &FeedbackEvent) -> Result<(), Box<dyn Error + Send + Sync>> {
        tracing::info!(
            target: "feedback",
            event_id = %event.event_id,
            item_kind = event.item_kind.as_str(),
            item_ref = %event.item_ref,
            verdict = event.verdict.as_str(),
            "用户反馈"
        );
        Ok(())
    }
}

/// 空操作接收方
///
/// 用于不需要遥测的场景（如单元测试）
#[derive(Debug, Clone, Default)]
pub struct NoOpFeedbackSink;

impl FeedbackSink for NoOpFeedbackSink {
    fn publish(&self, event: &FeedbackEvent) -> Result<(), Box<dyn Error + Send + Sync>> {
        tracing::debug!("NoOpFeedbackSink: 跳过反馈 - event_id={}", event.event_id);
        Ok(())
    }
}
