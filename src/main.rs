// ==========================================
// 供应链驾驶舱 - 命令行入口
// ==========================================
// 用法:
//   supply-chain-dss [alert_input.json]
//
// 未给出输入文件时使用驾驶舱表单的预填内容; 报告以 JSON 打印到 stdout。
// ==========================================

use std::path::Path;

use anyhow::Context;
use supply_chain_dss::api::AdvisoryApi;
use supply_chain_dss::config::{sample_alert_input, ConfigManager};
use supply_chain_dss::domain::AlertInput;
use supply_chain_dss::{i18n, logging};

fn read_alert_input(path: &Path) -> anyhow::Result<AlertInput> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("无法读取输入文件: {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("输入文件格式错误: {}", path.display()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    match std::env::var("SUPPLY_CHAIN_DSS_LOG_FORMAT") {
        Ok(format) if format.eq_ignore_ascii_case("json") => logging::init_json(),
        _ => logging::init(),
    }

    tracing::info!("==================================================");
    tracing::info!("{} - 库存决策支持", supply_chain_dss::APP_NAME);
    tracing::info!("系统版本: {}", supply_chain_dss::VERSION);
    tracing::info!("==================================================");

    let config = ConfigManager::load_or_default();
    i18n::set_locale(&config.locale);

    let input = match std::env::args().nth(1) {
        Some(path) => read_alert_input(Path::new(&path))?,
        None => {
            tracing::info!("未指定输入文件，使用示例表单内容");
            sample_alert_input()
        }
    };

    let api = AdvisoryApi::from_config(&config);
    let report = api.generate_stock_alerts(input).await?;

    for alert in &report.alerts {
        tracing::info!(
            "[{}] {}",
            i18n::severity_label(alert.severity),
            alert.product_ref
        );
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
