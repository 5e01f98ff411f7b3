// ==========================================
// 供应链驾驶舱 - 库存实体
// ==========================================
// 职责: 库存表行 + 可排序字段声明
// ==========================================

use crate::domain::types::StockStatus;
use crate::engine::sort::{FieldValue, SortableRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 库存表行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// SKU
    pub id: String,
    pub name: String,
    pub status: StockStatus,
    /// 当前库存（件）
    pub level: u32,
    /// 再订货点（件）
    pub reorder_point: u32,
    /// 提前期（原始文本, 如 "14 days"）
    pub lead_time: String,
}

impl InventoryItem {
    /// 按当前水位重新推导状态
    pub fn derived_status(&self) -> StockStatus {
        StockStatus::derive(self.level, self.reorder_point)
    }

    /// 是否已跌破再订货点
    pub fn below_reorder_point(&self) -> bool {
        self.level < self.reorder_point
    }
}

// ==========================================
// 可排序字段
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InventoryField {
    Id,
    Name,
    Status,
    Level,
    ReorderPoint,
    LeadTime,
}

impl InventoryField {
    pub fn as_str(&self) -> &'static str {
        match self {
            InventoryField::Id => "id",
            InventoryField::Name => "name",
            InventoryField::Status => "status",
            InventoryField::Level => "level",
            InventoryField::ReorderPoint => "reorderPoint",
            InventoryField::LeadTime => "leadTime",
        }
    }
}

impl fmt::Display for InventoryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for InventoryField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "id" => Ok(InventoryField::Id),
            "name" => Ok(InventoryField::Name),
            "status" => Ok(InventoryField::Status),
            "level" => Ok(InventoryField::Level),
            "reorderPoint" | "reorder_point" => Ok(InventoryField::ReorderPoint),
            "leadTime" | "lead_time" => Ok(InventoryField::LeadTime),
            other => Err(format!("unknown inventory field: {}", other)),
        }
    }
}

impl SortableRecord for InventoryItem {
    type Field = InventoryField;

    fn field_value(&self, field: InventoryField) -> FieldValue<'_> {
        match field {
            InventoryField::Id => FieldValue::Text(&self.id),
            InventoryField::Name => FieldValue::Text(&self.name),
            InventoryField::Status => FieldValue::ranked(self.status),
            InventoryField::Level => FieldValue::Number(f64::from(self.level)),
            InventoryField::ReorderPoint => FieldValue::Number(f64::from(self.reorder_point)),
            // 提前期按原始文本比较（"7 days" 会排在 "14 days" 之后）
            InventoryField::LeadTime => FieldValue::Text(&self.lead_time),
        }
    }
}
