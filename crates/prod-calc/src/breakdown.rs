//! 每日明細彙總

use chrono::NaiveDate;
use prod_core::{DailyBreakdown, ProductionRecord, SubPartSummary};

/// 明細彙總計算器
pub struct BreakdownSummarizer;

impl BreakdownSummarizer {
    /// 取出選定日期的記錄並產生明細
    ///
    /// 每筆記錄對應一列（同日同子件不合併）；當日無資料時回傳空明細。
    pub fn summarize(filtered: &[ProductionRecord], selected_date: NaiveDate) -> DailyBreakdown {
        let summaries: Vec<SubPartSummary> = filtered
            .iter()
            .filter(|r| r.date == selected_date)
            .map(SubPartSummary::from)
            .collect();

        if summaries.is_empty() {
            return DailyBreakdown::empty(selected_date);
        }

        DailyBreakdown::from_summaries(selected_date, summaries)
    }
}
