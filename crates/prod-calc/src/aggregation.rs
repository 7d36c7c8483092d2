//! 圖表序列彙總

use chrono::NaiveDate;
use prod_core::{ChartSeries, ChartSeriesPoint, DateRange, DateWindow, ProductionRecord};

use crate::bucketing::BucketingCalculator;

/// 序列彙總計算器
pub struct SeriesAggregator;

impl SeriesAggregator {
    /// 依日期範圍彙總篩選後記錄
    pub fn aggregate(
        filtered: &[ProductionRecord],
        date_range: DateRange,
        today: NaiveDate,
    ) -> ChartSeries {
        Self::aggregate_window(filtered, DateWindow::for_range(date_range, today))
    }

    /// 在指定窗口內彙總：每日一點、每個子件一組目標/實際
    ///
    /// 子件集合取自 `filtered` 全體（不受窗口影響），每個資料點都包含全部子件，
    /// 當日無資料的子件為 0，形成稠密矩陣。
    pub fn aggregate_window(filtered: &[ProductionRecord], window: DateWindow) -> ChartSeries {
        let sub_parts = BucketingCalculator::distinct_sub_parts(filtered);
        let day_groups = BucketingCalculator::group_by_day(filtered);

        let points = BucketingCalculator::create_daily_buckets(&window)
            .into_iter()
            .map(|date| {
                let mut point = ChartSeriesPoint::zeroed(date, &sub_parts);
                if let Some(records) = day_groups.get(&date) {
                    for record in records {
                        point
                            .values
                            .entry(record.sub_part.clone())
                            .or_default()
                            .add_record(record);
                    }
                }
                point
            })
            .collect();

        ChartSeries {
            window,
            sub_parts,
            points,
        }
    }
}
