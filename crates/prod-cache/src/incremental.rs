//! 增量計算：互動式看板工作階段

use chrono::NaiveDate;
use prod_calc::{BreakdownSummarizer, DashboardCalculator, SeriesAggregator};
use prod_core::{ChartSeries, DailyBreakdown, DateRange, FilterSpec, ProductionRecord};

use crate::dirty_tracking::{DashboardView, DirtyTracker};

/// 看板工作階段
///
/// 持有目前的篩選條件與選定日期。篩選後記錄只在篩選條件變更時重算，
/// 圖表序列與每日明細共用同一份篩選結果；切換選定日期只重算明細。
pub struct DashboardSession {
    calculator: DashboardCalculator,
    filter: FilterSpec,
    selected_date: Option<NaiveDate>,
    tracker: DirtyTracker,

    filtered: Vec<ProductionRecord>,
    series: Option<ChartSeries>,
    breakdown: Option<DailyBreakdown>,

    /// 篩選實際執行次數
    filter_evaluations: usize,
}

impl DashboardSession {
    /// 創建新的工作階段（預設篩選：最近 30 天，無選定日期）
    pub fn new(records: Vec<ProductionRecord>, today: NaiveDate) -> Self {
        Self {
            calculator: DashboardCalculator::new(records, today),
            filter: FilterSpec::new(),
            selected_date: None,
            tracker: DirtyTracker::new(),
            filtered: Vec::new(),
            series: None,
            breakdown: None,
            filter_evaluations: 0,
        }
    }

    pub fn calculator(&self) -> &DashboardCalculator {
        &self.calculator
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn filter_evaluations(&self) -> usize {
        self.filter_evaluations
    }

    /// 目前失效的視圖
    pub fn dirty_views(&self) -> Vec<DashboardView> {
        self.tracker.get_dirty_views()
    }

    /// 設置篩選條件（與目前相同時不失效）
    pub fn set_filter(&mut self, spec: FilterSpec) {
        if spec == self.filter {
            return;
        }
        tracing::debug!("篩選條件變更: {:?} -> {:?}", self.filter, spec);
        self.filter = spec;
        self.tracker.mark_filter_changed();
    }

    /// 切換零件類別（清除零件選擇）
    pub fn select_part_category(&mut self, part_category: impl Into<String>) {
        let mut spec = self.filter.clone();
        spec.select_part_category(part_category);
        self.set_filter(spec);
    }

    /// 設置零件
    pub fn select_part(&mut self, part: impl Into<String>) {
        let spec = self.filter.clone().with_part(part);
        self.set_filter(spec);
    }

    /// 設置日期範圍
    pub fn select_date_range(&mut self, date_range: DateRange) {
        let spec = self.filter.clone().with_date_range(date_range);
        self.set_filter(spec);
    }

    /// 選定日期（開啟明細）
    pub fn select_date(&mut self, date: NaiveDate) {
        if self.selected_date == Some(date) {
            return;
        }
        let window = self.calculator.window(&self.filter);
        if !window.contains(date) {
            tracing::warn!(
                "選定日期 {} 不在目前窗口 {} ~ {} 內，明細將為空",
                date,
                window.start,
                window.end
            );
        }
        self.selected_date = Some(date);
        self.tracker.mark_dirty(DashboardView::Breakdown);
    }

    /// 清除選定日期（關閉明細）
    pub fn clear_selection(&mut self) {
        self.selected_date = None;
        self.breakdown = None;
        self.tracker.clear_view(DashboardView::Breakdown);
    }

    /// 篩選後記錄
    pub fn filtered(&mut self) -> &[ProductionRecord] {
        self.refresh_filtered();
        &self.filtered
    }

    /// 圖表序列
    pub fn series(&mut self) -> &ChartSeries {
        self.refresh_filtered();
        if self.tracker.is_dirty(DashboardView::Series) {
            self.series = None;
            self.tracker.clear_view(DashboardView::Series);
        }

        let filtered = &self.filtered;
        let date_range = self.filter.date_range;
        let today = self.calculator.today();
        self.series
            .get_or_insert_with(|| SeriesAggregator::aggregate(filtered, date_range, today))
    }

    /// 選定日期的明細（未選定時為 None）
    pub fn breakdown(&mut self) -> Option<&DailyBreakdown> {
        let date = self.selected_date?;
        self.refresh_filtered();
        if self.tracker.is_dirty(DashboardView::Breakdown) {
            tracing::debug!("重算 {} 明細", date);
            self.breakdown = Some(BreakdownSummarizer::summarize(&self.filtered, date));
            self.tracker.clear_view(DashboardView::Breakdown);
        }
        self.breakdown.as_ref()
    }

    fn refresh_filtered(&mut self) {
        if !self.tracker.is_dirty(DashboardView::Filtered) {
            return;
        }
        self.filtered = self.calculator.filter(&self.filter);
        self.filter_evaluations += 1;
        self.tracker.clear_view(DashboardView::Filtered);
        tracing::debug!("重新篩選: {} 筆", self.filtered.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prod_core::Performance;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn session() -> DashboardSession {
        let records = vec![
            ProductionRecord::new(ymd(2024, 3, 1), "A1".into(), "SHAFT".into(), "WASHER".into(), 100, 80, 0),
            ProductionRecord::new(ymd(2024, 3, 9), "A1".into(), "VALVE".into(), "BRACKET".into(), 100, 95, 0),
            ProductionRecord::new(ymd(2024, 3, 9), "B2".into(), "SHAFT".into(), "WASHER".into(), 40, 45, 1),
        ];
        DashboardSession::new(records, ymd(2024, 3, 10))
    }

    #[test]
    fn test_filter_computed_once_for_both_views() {
        let mut session = session();
        session.select_date(ymd(2024, 3, 9));

        assert_eq!(session.series().len(), 31);
        assert_eq!(session.breakdown().unwrap().sub_parts.len(), 2);
        assert_eq!(session.filter_evaluations(), 1);

        // 再次讀取不重算
        session.series();
        session.breakdown();
        assert_eq!(session.filter_evaluations(), 1);
        assert!(session.dirty_views().is_empty());
    }

    #[test]
    fn test_selection_change_only_rebuilds_breakdown() {
        let mut session = session();
        session.series();
        session.select_date(ymd(2024, 3, 1));

        assert_eq!(session.dirty_views(), vec![DashboardView::Breakdown]);
        let breakdown = session.breakdown().unwrap();
        assert_eq!(breakdown.sub_parts[0].performance, Performance::Poor);
        assert_eq!(session.filter_evaluations(), 1);
    }

    #[test]
    fn test_filter_change_invalidates_everything() {
        let mut session = session();
        session.select_date(ymd(2024, 3, 9));
        session.series();
        session.breakdown();

        session.select_part_category("A1");
        assert_eq!(session.dirty_views().len(), 3);

        assert_eq!(session.series().sub_parts, vec!["BRACKET".to_string(), "WASHER".to_string()]);
        assert_eq!(session.breakdown().unwrap().sub_parts.len(), 1);
        assert_eq!(session.filter_evaluations(), 2);
    }

    #[test]
    fn test_same_filter_is_noop() {
        let mut session = session();
        session.filtered();
        session.set_filter(FilterSpec::new());

        assert!(!session.dirty_views().contains(&DashboardView::Filtered));
        session.filtered();
        assert_eq!(session.filter_evaluations(), 1);
    }

    #[test]
    fn test_category_change_resets_part() {
        let mut session = session();
        session.select_part("SHAFT");
        session.select_part_category("B2");

        assert!(session.filter().part.is_empty());
        assert_eq!(session.filtered().len(), 1);
    }

    #[test]
    fn test_date_range_and_clear_selection() {
        let mut session = session();
        session.select_date_range(DateRange::Last7Days);
        session.select_date(ymd(2024, 3, 1));

        assert_eq!(session.series().len(), 8);
        assert!(!session.breakdown().unwrap().has_production());

        session.clear_selection();
        assert!(session.breakdown().is_none());
        assert_eq!(session.selected_date(), None);
    }
}
