// ==========================================
// 供应链驾驶舱 - 驾驶舱表格 API
// ==========================================
// 职责: 库存表 / 预测表的视图状态（排序、展开行、人工覆写）与导出
// 红线: 视图只重排记录, 从不修改记录本身
// ==========================================

use std::collections::BTreeSet;
use std::path::Path;

use crate::api::error::{ApiError, ApiResult};
use crate::config::sample_data::DashboardDataset;
use crate::domain::forecast::{ForecastField, ForecastProduct};
use crate::domain::inventory::{InventoryField, InventoryItem};
use crate::domain::types::StockStatus;
use crate::engine::forecast::ForecastOverrides;
use crate::engine::sort::{order_refs, SortConfig, SortController, SortDirection, SortableRecord};
use crate::export::csv_export;

// ==========================================
// TableView - 可排序表格视图
// ==========================================

/// 可排序表格视图
///
/// 持有记录与排序状态; `rows()` 每次按当前状态返回新的行序列。
pub struct TableView<T: SortableRecord> {
    records: Vec<T>,
    sort: SortController<T::Field>,
}

impl<T: SortableRecord> TableView<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records,
            sort: SortController::new(),
        }
    }

    /// 点击列头
    pub fn select_field(&mut self, field: T::Field) -> SortConfig<T::Field> {
        self.sort.select_field(field)
    }

    pub fn sort_config(&self) -> Option<&SortConfig<T::Field>> {
        self.sort.config()
    }

    /// 列头排序指示
    pub fn direction_of(&self, field: T::Field) -> Option<SortDirection> {
        self.sort.direction_of(field)
    }

    /// 当前视图顺序的行
    pub fn rows(&self) -> Vec<&T> {
        order_refs(&self.records, self.sort.config())
    }

    /// 插入顺序的原始记录
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ==========================================
// InventoryTable - 库存表
// ==========================================
pub type InventoryTable = TableView<InventoryItem>;

impl TableView<InventoryItem> {
    /// 按列名排序（接受 camelCase / snake_case 列名）
    pub fn select_column(&mut self, column: &str) -> ApiResult<SortConfig<InventoryField>> {
        let field: InventoryField = column.parse().map_err(ApiError::InvalidInput)?;
        Ok(self.select_field(field))
    }

    /// 按状态统计
    pub fn count_by_status(&self, status: StockStatus) -> usize {
        self.records.iter().filter(|i| i.status == status).count()
    }

    /// 低于再订货点的行（当前视图顺序）
    pub fn below_reorder_point(&self) -> Vec<&InventoryItem> {
        self.rows()
            .into_iter()
            .filter(|i| i.below_reorder_point())
            .collect()
    }

    /// 按当前视图顺序导出 CSV
    pub fn export_csv(&self, path: &Path) -> ApiResult<usize> {
        Ok(csv_export::export_inventory_csv(path, self.rows())?)
    }
}

// ==========================================
// ForecastTable - 预测表
// ==========================================

/// 预测表
///
/// 在排序视图之上维护展开行与人工覆写（均只在内存中）。
pub struct ForecastTable {
    view: TableView<ForecastProduct>,
    expanded: BTreeSet<String>,
    overrides: ForecastOverrides,
}

impl ForecastTable {
    pub fn new(products: Vec<ForecastProduct>) -> Self {
        Self {
            view: TableView::new(products),
            expanded: BTreeSet::new(),
            overrides: ForecastOverrides::new(),
        }
    }

    pub fn select_field(&mut self, field: ForecastField) -> SortConfig<ForecastField> {
        self.view.select_field(field)
    }

    pub fn select_column(&mut self, column: &str) -> ApiResult<SortConfig<ForecastField>> {
        let field: ForecastField = column.parse().map_err(ApiError::InvalidInput)?;
        Ok(self.view.select_field(field))
    }

    pub fn rows(&self) -> Vec<&ForecastProduct> {
        self.view.rows()
    }

    fn find(&self, sku: &str) -> ApiResult<&ForecastProduct> {
        self.view
            .records()
            .iter()
            .find(|p| p.sku == sku)
            .ok_or_else(|| ApiError::NotFound(format!("预测行(sku={})不存在", sku)))
    }

    /// 展开/折叠明细行
    ///
    /// # 返回
    /// 切换后是否处于展开状态
    pub fn toggle_expanded(&mut self, sku: &str) -> ApiResult<bool> {
        self.find(sku)?;
        if self.expanded.remove(sku) {
            Ok(false)
        } else {
            self.expanded.insert(sku.to_string());
            Ok(true)
        }
    }

    pub fn is_expanded(&self, sku: &str) -> bool {
        self.expanded.contains(sku)
    }

    /// 处理人工覆写输入框
    pub fn set_override(&mut self, sku: &str, raw: &str) -> ApiResult<Option<f64>> {
        self.find(sku)?;
        Ok(self.overrides.apply_input(sku, raw))
    }

    pub fn overrides(&self) -> &ForecastOverrides {
        &self.overrides
    }

    pub fn effective_forecast(&self, sku: &str) -> ApiResult<f64> {
        let product = self.find(sku)?;
        Ok(self.overrides.effective_forecast(product))
    }

    /// 按当前视图顺序导出 CSV（含人工覆写列）
    pub fn export_csv(&self, path: &Path) -> ApiResult<usize> {
        Ok(csv_export::export_forecasts_csv(
            path,
            self.rows(),
            &self.overrides,
        )?)
    }

    /// 按当前视图顺序生成 CSV 文本
    pub fn csv_string(&self) -> ApiResult<String> {
        Ok(csv_export::forecasts_csv_string(
            self.rows(),
            &self.overrides,
        )?)
    }
}

// ==========================================
// DashboardApi - 驾驶舱
// ==========================================

/// 驾驶舱API
///
/// 聚合库存表与预测表两个视图; 数据集由调用方注入。
pub struct DashboardApi {
    inventory: InventoryTable,
    forecasts: ForecastTable,
}

impl DashboardApi {
    pub fn new(dataset: DashboardDataset) -> Self {
        tracing::debug!(
            inventory_rows = dataset.inventory.len(),
            forecast_rows = dataset.forecasts.len(),
            "驾驶舱数据已加载"
        );
        Self {
            inventory: TableView::new(dataset.inventory),
            forecasts: ForecastTable::new(dataset.forecasts),
        }
    }

    pub fn inventory(&self) -> &InventoryTable {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut InventoryTable {
        &mut self.inventory
    }

    pub fn forecasts(&self) -> &ForecastTable {
        &self.forecasts
    }

    pub fn forecasts_mut(&mut self) -> &mut ForecastTable {
        &mut self.forecasts
    }
}

impl Default for DashboardApi {
    fn default() -> Self {
        Self::new(DashboardDataset::sample())
    }
}
