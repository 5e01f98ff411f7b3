// ==========================================
// 供应链驾驶舱 - 引擎层
// ==========================================
// 职责: 告警分类、补货建议、表格排序等纯函数规则
// 红线: 引擎无共享可变状态, 不做 I/O, 所有规则以数据表声明
// ==========================================

pub mod alert_classifier;
pub mod events;
pub mod forecast;
pub mod reorder_advisor;
pub mod rules;
pub mod signal;
pub mod sort;

// 重导出核心引擎
pub use alert_classifier::{default_alert_rules, AlertClassifier, AlertRule};
pub use events::{
    FeedbackEvent, FeedbackItemKind, FeedbackSink, NoOpFeedbackSink, TracingFeedbackSink,
};
pub use forecast::ForecastOverrides;
pub use reorder_advisor::{
    default_general_guidance, default_reorder_rules, ReorderAdvisor, ReorderRule,
};
pub use rules::Condition;
pub use signal::ParsedSignals;
pub use sort::{
    order, order_refs, FieldValue, SortConfig, SortController, SortDirection, SortableRecord,
};
