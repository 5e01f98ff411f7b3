// ==========================================
// 供应链驾驶舱 - 导出层
// ==========================================
// 职责: 将驾驶舱表格按当前视图顺序导出为 CSV
// ==========================================

pub mod csv_export;

pub use csv_export::{
    export_forecasts_csv, export_inventory_csv, forecasts_csv_string, write_forecasts_csv,
    write_inventory_csv, ExportError, FORECAST_CSV_FILE_NAME, FORECAST_CSV_HEADERS,
    INVENTORY_CSV_FILE_NAME, INVENTORY_CSV_HEADERS,
};
