//! 每日明細模型與績效分級

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::long_label;
use crate::record::ProductionRecord;

/// 單筆記錄「嚴重落後」門檻：短缺比例 > 10%
pub const POOR_SHORTFALL_RATIO: Decimal = Decimal::from_parts(1, 0, 0, false, 1);

/// 整日「警告」上限：落後子件比例 ≤ 30%
pub const WARNING_UNDERPERFORMING_SHARE: Decimal = Decimal::from_parts(3, 0, 0, false, 1);

/// 績效等級
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Performance {
    /// 達標
    Good,
    /// 略低於目標
    Warning,
    /// 明顯低於目標
    Poor,
}

impl Performance {
    /// 單筆記錄分級
    ///
    /// - 差異 ≥ 0：Good
    /// - 差異 < 0 且 |差異| / 目標 > 10%：Poor
    /// - 其餘：Warning
    ///
    /// 實際產量非負，故目標為 0 時差異不可能為負，不會出現除以零。
    pub fn classify(target: u32, actual: u32) -> Self {
        if actual >= target {
            return Performance::Good;
        }

        let shortfall = Decimal::from(target - actual);
        let ratio = shortfall / Decimal::from(target);
        if ratio > POOR_SHORTFALL_RATIO {
            Performance::Poor
        } else {
            Performance::Warning
        }
    }

    /// 整日分級（依落後子件比例，與單筆分級規則無關）
    ///
    /// - 無落後：Good
    /// - 落後比例 ≤ 30%：Warning
    /// - 其餘：Poor
    pub fn classify_day(underperforming: usize, total: usize) -> Self {
        if underperforming == 0 || total == 0 {
            return Performance::Good;
        }

        let share = Decimal::from(underperforming as u64) / Decimal::from(total as u64);
        if share <= WARNING_UNDERPERFORMING_SHARE {
            Performance::Warning
        } else {
            Performance::Poor
        }
    }

    /// 顯示標籤
    pub fn label(self) -> &'static str {
        match self {
            Performance::Good => "On Target",
            Performance::Warning => "Below Target",
            Performance::Poor => "Significantly Below",
        }
    }
}

/// 子件明細（每筆記錄一列，不合併）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubPartSummary {
    pub sub_part: String,
    pub part: String,
    pub part_category: String,
    pub target: u32,
    pub actual: u32,

    /// 實際 - 目標
    pub delta: i64,

    pub performance: Performance,
}

impl From<&ProductionRecord> for SubPartSummary {
    fn from(record: &ProductionRecord) -> Self {
        Self {
            sub_part: record.sub_part.clone(),
            part: record.part.clone(),
            part_category: record.part_category.clone(),
            target: record.target,
            actual: record.actual,
            delta: record.delta(),
            performance: Performance::classify(record.target, record.actual),
        }
    }
}

/// 每日生產明細
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyBreakdown {
    /// 日期
    pub date: NaiveDate,

    /// 標題標籤
    pub formatted_date: String,

    /// 子件明細
    pub sub_parts: Vec<SubPartSummary>,

    /// 目標合計
    pub total_target: u64,

    /// 實際合計
    pub total_actual: u64,

    /// 實際合計 - 目標合計
    pub total_delta: i64,
}

impl DailyBreakdown {
    /// 創建無生產資料的明細
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            formatted_date: long_label(date),
            sub_parts: Vec::new(),
            total_target: 0,
            total_actual: 0,
            total_delta: 0,
        }
    }

    /// 由子件明細計算合計
    pub fn from_summaries(date: NaiveDate, sub_parts: Vec<SubPartSummary>) -> Self {
        let total_target: u64 = sub_parts.iter().map(|s| u64::from(s.target)).sum();
        let total_actual: u64 = sub_parts.iter().map(|s| u64::from(s.actual)).sum();

        Self {
            date,
            formatted_date: long_label(date),
            sub_parts,
            total_target,
            total_actual,
            total_delta: total_actual as i64 - total_target as i64,
        }
    }

    /// 當日是否無生產資料
    pub fn has_production(&self) -> bool {
        !self.sub_parts.is_empty()
    }

    /// 低於目標的子件數
    pub fn underperforming_count(&self) -> usize {
        self.sub_parts.iter().filter(|s| s.actual < s.target).count()
    }

    /// 整日績效
    pub fn overall_performance(&self) -> Performance {
        Performance::classify_day(self.underperforming_count(), self.sub_parts.len())
    }
}
