//! 看板主計算器

use chrono::NaiveDate;
use prod_core::{DateWindow, FilterSpec, ProductionRecord};

use crate::aggregation::SeriesAggregator;
use crate::breakdown::BreakdownSummarizer;
use crate::filtering::FilterEvaluator;
use crate::DashboardResult;

/// 看板計算器
///
/// 持有記錄集合與基準日；記錄在建構後唯讀。
pub struct DashboardCalculator {
    /// 記錄集合（產生器或外部資料來源）
    records: Vec<ProductionRecord>,

    /// 基準日（視為「今天」）
    today: NaiveDate,
}

impl DashboardCalculator {
    /// 創建新的看板計算器
    pub fn new(records: Vec<ProductionRecord>, today: NaiveDate) -> Self {
        Self { records, today }
    }

    pub fn records(&self) -> &[ProductionRecord] {
        &self.records
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// 篩選條件對應的日期窗口
    pub fn window(&self, spec: &FilterSpec) -> DateWindow {
        DateWindow::for_range(spec.date_range, self.today)
    }

    /// 只做篩選
    pub fn filter(&self, spec: &FilterSpec) -> Vec<ProductionRecord> {
        FilterEvaluator::filter(&self.records, spec, self.today)
    }

    /// 主計算入口：篩選一次，供圖表序列與每日明細共用
    pub fn calculate(
        &self,
        spec: &FilterSpec,
        selected_date: Option<NaiveDate>,
    ) -> DashboardResult {
        tracing::info!(
            "開始看板計算：記錄 {} 筆，類別 '{}'，零件 '{}'，範圍 {}",
            self.records.len(),
            spec.part_category,
            spec.part,
            spec.date_range.as_str()
        );

        let start_time = std::time::Instant::now();

        // Step 1: 篩選
        tracing::debug!("Step 1: 篩選記錄");
        let filtered = self.filter(spec);
        tracing::debug!("篩選後記錄: {} 筆", filtered.len());

        // Step 2: 圖表序列
        tracing::debug!("Step 2: 彙總圖表序列");
        let series = SeriesAggregator::aggregate(&filtered, spec.date_range, self.today);
        tracing::debug!(
            "資料點 {} 個，子件 {} 種",
            series.points.len(),
            series.sub_parts.len()
        );

        // Step 3: 每日明細（有選定日期時）
        let breakdown = selected_date.map(|date| {
            tracing::debug!("Step 3: 產生 {} 明細", date);
            BreakdownSummarizer::summarize(&filtered, date)
        });

        let elapsed = start_time.elapsed().as_millis();
        tracing::info!("看板計算完成，耗時 {} ms", elapsed);

        DashboardResult {
            filter: spec.clone(),
            filtered,
            series,
            breakdown,
            calculation_time_ms: Some(elapsed),
        }
    }
}
