// ==========================================
// SortController 集成测试
// ==========================================
// 测试目标: 验证表格排序状态机与稳定排序
// 覆盖范围: 字段切换、方向反转、枚举声明序、稳定性、类型不一致
// ==========================================


use supply_chain_dss::config::sample_inventory;
use supply_chain_dss::domain::forecast::ForecastField;
use supply_chain_dss::domain::inventory::{InventoryField, InventoryItem};
use supply_chain_dss::domain::types::{ForecastBias, Severity, StockStatus};
use supply_chain_dss::engine::sort::{
    order, FieldValue, SortConfig, SortController, SortDirection, SortableRecord,
};
use test_helpers::{forecast_product, inventory_item};

fn ids(rows: &[InventoryItem]) -> Vec<&str> {
    rows.iter().map(|i| i.id.as_str()).collect()
}

// ==========================================
// 测试用例 1: 字段选择状态机
// ==========================================

#[test]
fn test_select_field_toggle_sequence() {
    println!("\n=== 测试：列头点击序列 ===");

    let mut controller = SortController::new();
    assert!(controller.config().is_none());

    let first = controller.select_field(InventoryField::Level);
    assert_eq!(first, SortConfig::ascending(InventoryField::Level));

    let second = controller.select_field(InventoryField::Level);
    assert_eq!(second.direction, SortDirection::Descending);

    let third = controller.select_field(InventoryField::Level);
    assert_eq!(third.direction, SortDirection::Ascending);

    // 换字段 → 升序重新开始
    controller.select_field(InventoryField::Level);
    let switched = controller.select_field(InventoryField::Name);
    assert_eq!(switched, SortConfig::ascending(InventoryField::Name));
    assert_eq!(controller.direction_of(InventoryField::Level), None);

    println!("=== 测试通过 ===\n");
}

// ==========================================
// 测试用例 2: 状态按业务顺序, 不按字母
// ==========================================

#[test]
fn test_status_ascending_follows_declared_order() {
    let mut controller = SortController::new();
    controller.select_field(InventoryField::Status);

    let rows = controller.order(&sample_inventory());
    let statuses: Vec<StockStatus> = rows.iter().map(|i| i.status).collect();
    assert_eq!(
        statuses,
        vec![
            StockStatus::InStock,
            StockStatus::InStock,
            StockStatus::InStock,
            StockStatus::LowStock,
            StockStatus::OutOfStock,
        ]
    );
    // 相同状态保持插入顺序
    assert_eq!(ids(&rows)[..3], ["SKU-001", "SKU-003", "SKU-005"]);
}

#[derive(Clone)]
struct AlertRow {
    id: u32,
    severity: Severity,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum AlertRowField {
    Severity,
}

impl SortableRecord for AlertRow {
    type Field = AlertRowField;

    fn field_value(&self, field: AlertRowField) -> FieldValue<'_> {
        match field {
            AlertRowField::Severity => FieldValue::ranked(self.severity),
        }
    }
}

#[test]
fn test_severity_rank_is_not_alphabetical() {
    let rows = vec![
        AlertRow {
            id: 1,
            severity: Severity::Critical,
        },
        AlertRow {
            id: 2,
            severity: Severity::Info,
        },
        AlertRow {
            id: 3,
            severity: Severity::Warning,
        },
    ];

    // 字母序为 critical < info < warning; 声明序为 info < warning < critical
    let sorted = order(&rows, Some(&SortConfig::ascending(AlertRowField::Severity)));
    let ids: Vec<u32> = sorted.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
}

// ==========================================
// 测试用例 3: 稳定性与反转
// ==========================================

#[test]
fn test_sort_is_stable_both_directions() {
    let rows = vec![
        inventory_item("A", "Alpha", 50, 10),
        inventory_item("B", "Bravo", 20, 10),
        inventory_item("C", "Charlie", 50, 10),
        inventory_item("D", "Delta", 20, 10),
        inventory_item("E", "Echo", 50, 10),
    ];

    let asc = order(&rows, Some(&SortConfig::ascending(InventoryField::Level)));
    assert_eq!(ids(&asc), vec!["B", "D", "A", "C", "E"]);

    let desc = order(&rows, Some(&SortConfig::descending(InventoryField::Level)));
    assert_eq!(ids(&desc), vec!["A", "C", "E", "B", "D"]);
}

#[test]
fn test_reselect_reverses_exactly_without_ties() {
    let mut controller = SortController::new();
    let rows = sample_inventory();

    controller.select_field(InventoryField::Name);
    let asc = controller.order(&rows);
    controller.select_field(InventoryField::Name);
    let desc = controller.order(&rows);

    let mut reversed = ids(&asc);
    reversed.reverse();
    assert_eq!(ids(&desc), reversed);
}

#[test]
fn test_no_config_keeps_insertion_order_and_input_untouched() {
    let rows = sample_inventory();
    let snapshot = rows.clone();

    let unsorted = order::<InventoryItem>(&rows, None);
    assert_eq!(unsorted, rows);

    let _ = order(&rows, Some(&SortConfig::descending(InventoryField::Level)));
    assert_eq!(rows, snapshot);
}

// ==========================================
// 测试用例 4: 文本比较与缺失值
// ==========================================

#[test]
fn test_text_compare_puts_lowercase_first_within_a_word() {
    let rows = vec![
        inventory_item("1", "beta", 1, 0),
        inventory_item("2", "Alpha", 1, 0),
        inventory_item("3", "alpha", 1, 0),
        inventory_item("4", "Beta", 1, 0),
    ];
    let sorted = order(&rows, Some(&SortConfig::ascending(InventoryField::Name)));
    let names: Vec<&str> = sorted.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["alpha", "Alpha", "beta", "Beta"]);
}

#[test]
fn test_accented_names_sort_next_to_their_base_letter() {
    let rows = vec![
        inventory_item("1", "Zeta Valve", 1, 0),
        inventory_item("2", "Éclair Pump", 1, 0),
        inventory_item("3", "Fan Unit", 1, 0),
        inventory_item("4", "alpha", 1, 0),
        inventory_item("5", "Alpha", 1, 0),
    ];

    let asc = order(&rows, Some(&SortConfig::ascending(InventoryField::Name)));
    let names: Vec<&str> = asc.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["alpha", "Alpha", "Éclair Pump", "Fan Unit", "Zeta Valve"]
    );

    let desc = order(&rows, Some(&SortConfig::descending(InventoryField::Name)));
    let names: Vec<&str> = desc.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Zeta Valve", "Fan Unit", "Éclair Pump", "Alpha", "alpha"]
    );
}

#[test]
fn test_bias_sorts_as_text() {
    let rows = vec![
        forecast_product("S1", "One", 10.0, Some(ForecastBias::Under)),
        forecast_product("S2", "Two", 10.0, Some(ForecastBias::Over)),
    ];
    let sorted = order(&rows, Some(&SortConfig::ascending(ForecastField::Bias)));
    let skus: Vec<&str> = sorted.iter().map(|p| p.sku.as_str()).collect();
    assert_eq!(skus, vec!["S2", "S1"]);
}

#[test]
fn test_missing_values_keep_input_order() {
    let rows = vec![
        forecast_product("S1", "One", 10.0, None),
        forecast_product("S2", "Two", 10.0, None),
        forecast_product("S3", "Three", 10.0, None),
    ];
    for config in [
        SortConfig::ascending(ForecastField::Bias),
        SortConfig::descending(ForecastField::Bias),
    ] {
        let sorted = order(&rows, Some(&config));
        let skus: Vec<&str> = sorted.iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(skus, vec!["S1", "S2", "S3"]);
    }
}
