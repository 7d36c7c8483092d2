//! 看板快照（完整 JSON 文件）

use chrono::{DateTime, NaiveDate, Utc};
use prod_core::{ChartSeries, DailyBreakdown, FilterSpec, Performance, ProductionRecord};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculator::DashboardCalculator;
use crate::options::FilterOptions;
use crate::statistics::{DashboardStatistics, DataSummary};

/// 看板快照：記錄、選項、統計、序列與明細的單一文件
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    /// 快照ID
    pub snapshot_id: Uuid,

    /// 產生時間
    pub generated_at: DateTime<Utc>,

    pub production_data: Vec<ProductionRecord>,
    pub filter_options: FilterOptions,
    pub current_filters: FilterSpec,
    pub statistics: DashboardStatistics,
    pub data_summary: DataSummary,

    /// 目前篩選下的圖表序列
    pub chart_data: ChartSeries,

    /// 選定日期的明細
    pub daily_breakdown: Option<DailyBreakdown>,

    /// 選定日期的整日績效
    pub overall_performance: Option<Performance>,
}

impl DashboardSnapshot {
    /// 建立快照
    ///
    /// 選項與資料摘要涵蓋全部記錄；統計、序列與明細依目前篩選條件。
    pub fn build(
        calculator: &DashboardCalculator,
        spec: &FilterSpec,
        selected_date: Option<NaiveDate>,
    ) -> Self {
        let records = calculator.records();
        let filter_options = FilterOptions::from_records(records);
        let data_summary = DataSummary::from_records(records, &filter_options);

        let result = calculator.calculate(spec, selected_date);
        let total_days = calculator.window(spec).day_count();
        let statistics = DashboardStatistics::from_records(&result.filtered, total_days);
        let overall_performance = result
            .breakdown
            .as_ref()
            .map(DailyBreakdown::overall_performance);

        Self {
            snapshot_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            production_data: records.to_vec(),
            filter_options,
            current_filters: spec.clone(),
            statistics,
            data_summary,
            chart_data: result.series,
            daily_breakdown: result.breakdown,
            overall_performance,
        }
    }

    /// 輸出 JSON
    pub fn to_json(&self, pretty: bool) -> prod_core::Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prod_core::DateRange;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn calculator() -> DashboardCalculator {
        DashboardCalculator::new(
            vec![
                ProductionRecord::new(ymd(2024, 1, 1), "C".into(), "P".into(), "A".into(), 50, 60, 0),
                ProductionRecord::new(ymd(2024, 1, 1), "C".into(), "P".into(), "B".into(), 30, 20, 1),
            ],
            ymd(2024, 1, 1),
        )
    }

    #[test]
    fn test_build_snapshot() {
        let snapshot = DashboardSnapshot::build(&calculator(), &FilterSpec::new(), Some(ymd(2024, 1, 1)));

        assert_eq!(snapshot.production_data.len(), 2);
        assert_eq!(snapshot.statistics.total_days, 31);
        assert_eq!(snapshot.statistics.total_delta, 0);
        assert_eq!(snapshot.data_summary.unique_sub_parts, 2);
        assert_eq!(snapshot.chart_data.len(), 31);
        assert_eq!(snapshot.overall_performance, Some(Performance::Poor));
    }

    #[test]
    fn test_statistics_follow_current_filter() {
        let today = ymd(2024, 1, 10);
        let calculator = DashboardCalculator::new(
            vec![
                ProductionRecord::new(today, "C".into(), "P".into(), "A".into(), 100, 90, 0),
                ProductionRecord::new(today, "D".into(), "P".into(), "B".into(), 500, 500, 1),
                ProductionRecord::new(ymd(2023, 12, 1), "C".into(), "P".into(), "E".into(), 700, 700, 0),
            ],
            today,
        );
        let spec = FilterSpec::new()
            .with_part_category("C")
            .with_date_range(DateRange::Last7Days);

        let snapshot = DashboardSnapshot::build(&calculator, &spec, None);

        // 統計只涵蓋篩選後記錄
        assert_eq!(snapshot.statistics.total_days, 8);
        assert_eq!(snapshot.statistics.active_sub_parts, 1);
        assert_eq!(snapshot.statistics.total_target, 100);
        assert_eq!(snapshot.statistics.total_actual, 90);
        assert_eq!(snapshot.statistics.total_delta, -10);
        assert_eq!(snapshot.chart_data.sub_parts, vec!["A".to_string()]);

        // 選項與資料摘要仍涵蓋全部記錄
        assert_eq!(snapshot.data_summary.total_records, 3);
        assert_eq!(snapshot.filter_options.sub_parts, vec!["A", "B", "E"]);
    }

    #[test]
    fn test_snapshot_json_keys() {
        let snapshot = DashboardSnapshot::build(&calculator(), &FilterSpec::new(), None);
        let value: serde_json::Value = serde_json::from_str(&snapshot.to_json(false).unwrap()).unwrap();

        assert_eq!(value["currentFilters"]["dateRange"], "30days");
        assert_eq!(value["filterOptions"]["subParts"][1], "B");
        assert!(value["dailyBreakdown"].is_null());
        assert_eq!(value["productionData"][0]["subPart"], "A");
    }
}
