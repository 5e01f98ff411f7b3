// ==========================================
// 配置层集成测试
// ==========================================
// 测试目标: 验证配置文件加载/保存、规则表覆写、示例数据集加载
// ==========================================


use supply_chain_dss::api::AdvisoryApi;
use supply_chain_dss::config::{
    sample_alert_input, ConfigError, ConfigManager, DashboardDataset, EngineConfig,
};
use supply_chain_dss::domain::types::Severity;
use supply_chain_dss::domain::InputField;
use supply_chain_dss::engine::alert_classifier::AlertRule;
use supply_chain_dss::engine::rules::Condition;
use tempfile::TempDir;
use test_helpers::demand_and_inventory;

#[test]
fn test_rule_table_override_from_json_file() {
    println!("\n=== 测试：从 JSON 文件覆写告警规则 ===");

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{
            "locale": "zh-CN",
            "alert_rules": [
                {
                    "rule_id": "ALERT_NEUTRINO_LOW",
                    "conditions": [
                        {"kind": "contains", "field": "historical_demand", "token": "Neutrino Sensor"},
                        {"kind": "contains", "field": "current_inventory", "token": "Neutrino Sensor: 20 units"}
                    ],
                    "severity": "warning",
                    "product_ref": "Neutrino Sensor",
                    "message": "Running low."
                }
            ]
        }"#,
    )
    .unwrap();

    let config = ConfigManager::load(&path).unwrap();
    assert_eq!(config.locale, "zh-CN");

    let alerts = config.build_classifier().classify(&demand_and_inventory(
        "Neutrino Sensor sold 300 units",
        "Neutrino Sensor: 20 units",
    ));
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].severity, Severity::Warning);

    // 未覆写的补货规则仍为默认
    assert_eq!(config.build_advisor().rules().len(), 4);

    println!("=== 测试通过 ===\n");
}

#[test]
fn test_saved_config_drives_api() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let config = EngineConfig {
        alert_rules: Some(vec![AlertRule {
            rule_id: "ONLY_C".to_string(),
            conditions: vec![Condition::contains(InputField::HistoricalDemand, "Product C")],
            severity: Severity::Critical,
            product_ref: "Product C".to_string(),
            message: "Holiday risk.".to_string(),
        }]),
        general_guidance: Some(vec![]),
        ..EngineConfig::default()
    };
    ConfigManager::save(&path, &config).unwrap();

    let loaded = ConfigManager::load(&path).unwrap();
    let report = AdvisoryApi::from_config(&loaded)
        .generate(&sample_alert_input())
        .unwrap();
    assert_eq!(report.alerts.len(), 1);
    assert_eq!(report.alerts[0].product_ref, "Product C");
    assert!(report.reorder.general_guidance.is_empty());
}

#[test]
fn test_malformed_rule_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"alert_rules": [{"rule_id": "X"}]}"#).unwrap();

    assert!(matches!(
        ConfigManager::load(&path),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn test_dataset_from_json_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dataset.json");
    std::fs::write(
        &path,
        r#"{
            "inventory": [
                {"id": "SKU-100", "name": "Flux Capacitor", "status": "Low Stock",
                 "level": 3, "reorderPoint": 5, "leadTime": "30 days"}
            ]
        }"#,
    )
    .unwrap();

    let dataset = DashboardDataset::from_json_file(&path).unwrap();
    assert_eq!(dataset.inventory.len(), 1);
    assert_eq!(dataset.inventory[0].reorder_point, 5);
    assert!(dataset.forecasts.is_empty());
}
