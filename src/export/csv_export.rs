// ==========================================
// 供应链驾驶舱 - CSV 导出
// ==========================================
// 职责: 预测表 / 库存表 CSV 导出
// 格式: 首行表头, 每个单元格都加引号, 行顺序与传入顺序一致
// ==========================================

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, WriterBuilder};
use thiserror::Error;

use crate::domain::forecast::ForecastProduct;
use crate::domain::inventory::InventoryItem;
use crate::engine::forecast::ForecastOverrides;

/// 预测表默认导出文件名
pub const FORECAST_CSV_FILE_NAME: &str = "product_forecasts.csv";

/// 库存表默认导出文件名
pub const INVENTORY_CSV_FILE_NAME: &str = "inventory_levels.csv";

pub const FORECAST_CSV_HEADERS: [&str; 6] = [
    "SKU",
    "Product Name",
    "Accuracy (MAPE)",
    "Bias",
    "Current Forecast (Units)",
    "Manual Override",
];

pub const INVENTORY_CSV_HEADERS: [&str; 6] = [
    "SKU",
    "Product Name",
    "Status",
    "Stock Level",
    "Reorder Point",
    "Lead Time",
];

/// 导出错误
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("导出文件写入失败: path={path}, {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV 写入失败: {0}")]
    Csv(#[from] csv::Error),

    #[error("导出内容不是有效的 UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

fn quoted_writer<W: Write>(writer: W) -> csv::Writer<W> {
    WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(writer)
}

fn create_file(path: &Path) -> Result<File, ExportError> {
    File::create(path).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// 写出预测表
///
/// # 返回
/// 写出的数据行数（不含表头）
pub fn write_forecasts_csv<'a, W, I>(
    writer: W,
    rows: I,
    overrides: &ForecastOverrides,
) -> Result<usize, ExportError>
where
    W: Write,
    I: IntoIterator<Item = &'a ForecastProduct>,
{
    let mut csv_writer = quoted_writer(writer);
    csv_writer.write_record(FORECAST_CSV_HEADERS)?;

    let mut count = 0;
    for product in rows {
        let accuracy = format!("{}%", product.accuracy);
        let bias = product.bias.map(|b| b.as_str()).unwrap_or("");
        let current = product.current_forecast.to_string();
        // 覆写为 0 时与未覆写一样输出空单元格
        let manual = overrides
            .get(&product.sku)
            .filter(|v| *v != 0.0)
            .map(|v| v.to_string())
            .unwrap_or_default();

        csv_writer.write_record([
            product.sku.as_str(),
            product.name.as_str(),
            accuracy.as_str(),
            bias,
            current.as_str(),
            manual.as_str(),
        ])?;
        count += 1;
    }

    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(count)
}

/// 导出预测表到文件
pub fn export_forecasts_csv<'a, I>(
    path: &Path,
    rows: I,
    overrides: &ForecastOverrides,
) -> Result<usize, ExportError>
where
    I: IntoIterator<Item = &'a ForecastProduct>,
{
    let count = write_forecasts_csv(create_file(path)?, rows, overrides)?;
    tracing::info!(path = %path.display(), rows = count, "预测表已导出");
    Ok(count)
}

/// 预测表 CSV 文本
pub fn forecasts_csv_string<'a, I>(
    rows: I,
    overrides: &ForecastOverrides,
) -> Result<String, ExportError>
where
    I: IntoIterator<Item = &'a ForecastProduct>,
{
    let mut buffer = Vec::new();
    write_forecasts_csv(&mut buffer, rows, overrides)?;
    Ok(String::from_utf8(buffer)?)
}

/// 写出库存表
pub fn write_inventory_csv<'a, W, I>(writer: W, rows: I) -> Result<usize, ExportError>
where
    W: Write,
    I: IntoIterator<Item = &'a InventoryItem>,
{
    let mut csv_writer = quoted_writer(writer);
    csv_writer.write_record(INVENTORY_CSV_HEADERS)?;

    let mut count = 0;
    for item in rows {
        csv_writer.write_record([
            item.id.clone(),
            item.name.clone(),
            item.status.label().to_string(),
            item.level.to_string(),
            item.reorder_point.to_string(),
            item.lead_time.clone(),
        ])?;
        count += 1;
    }

    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(count)
}

/// 导出库存表到文件
pub fn export_inventory_csv<'a, I>(path: &Path, rows: I) -> Result<usize, ExportError>
where
    I: IntoIterator<Item = &'a InventoryItem>,
{
    let count = write_inventory_csv(create_file(path)?, rows)?;
    tracing::info!(path = %path.display(), rows = count, "库存表已导出");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::sample_data::{sample_forecasts, sample_inventory};

    #[test]
    fn test_forecast_csv_every_cell_quoted() {
        let forecasts = sample_forecasts();
        let mut overrides = ForecastOverrides::new();
        overrides.apply_input("SKU-002", "2450.5");

        let text = forecasts_csv_string(&forecasts, &overrides).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[0],
            r#""SKU","Product Name","Accuracy (MAPE)","Bias","Current Forecast (Units)","Manual Override""#
        );
        assert_eq!(lines[1], r#""SKU-001","Widget A","12%","over","1500","""#);
        assert_eq!(lines[2], r#""SKU-002","Widget B","25%","under","2200","2450.5""#);
        assert_eq!(lines[3], r#""SKU-003","Gadget Pro","8%","","800","""#);
    }

    #[test]
    fn test_zero_override_exports_empty_cell() {
        let forecasts = sample_forecasts();
        let mut overrides = ForecastOverrides::new();
        assert_eq!(overrides.apply_input("SKU-001", "0"), Some(0.0));
        overrides.apply_input("SKU-003", "1600 units");

        let text = forecasts_csv_string(&forecasts, &overrides).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], r#""SKU-001","Widget A","12%","over","1500","""#);
        assert_eq!(lines[3], r#""SKU-003","Gadget Pro","8%","","800","1600""#);
    }

    #[test]
    fn test_inventory_csv_uses_status_labels() {
        let mut buffer = Vec::new();
        let count = write_inventory_csv(&mut buffer, &sample_inventory()).unwrap();
        assert_eq!(count, 5);

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains(r#""SKU-004","Gravity Plating","Out of Stock","0","75","10 days""#));
    }

    #[test]
    fn test_export_to_missing_directory_is_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing").join(FORECAST_CSV_FILE_NAME);
        let result = export_forecasts_csv(&path, &sample_forecasts(), &ForecastOverrides::new());
        assert!(matches!(result, Err(ExportError::Io { .. })));
    }
}
