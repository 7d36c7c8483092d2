//! 日期窗口與日期格式

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::filter::DateRange;
use crate::{ProductionError, Result};

/// 標準日期格式
pub const CANONICAL_DATE_FORMAT: &str = "%Y-%m-%d";

/// 圖表軸標籤格式（如 Jan 01）
pub const SHORT_LABEL_FORMAT: &str = "%b %d";

/// 明細標題格式（如 January 01, 2024）
pub const LONG_LABEL_FORMAT: &str = "%B %d, %Y";

/// 解析 YYYY-MM-DD 日期
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), CANONICAL_DATE_FORMAT)
        .map_err(|e| ProductionError::InvalidDate(format!("{text}: {e}")))
}

/// 日期窗口（起訖日皆包含）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    /// 起始日
    pub start: NaiveDate,
    /// 結束日
    pub end: NaiveDate,
}

impl DateWindow {
    /// 創建新的日期窗口
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// 依日期範圍計算窗口：[today - N 天, today]
    pub fn for_range(range: DateRange, today: NaiveDate) -> Self {
        let start = today
            .checked_sub_signed(Duration::days(range.lookback_days()))
            .unwrap_or(NaiveDate::MIN);
        Self { start, end: today }
    }

    /// 最近 N 天（含今天）
    pub fn trailing_days(days: u32, today: NaiveDate) -> Self {
        let offset = i64::from(days.max(1)) - 1;
        let start = today
            .checked_sub_signed(Duration::days(offset))
            .unwrap_or(NaiveDate::MIN);
        Self { start, end: today }
    }

    /// 檢查日期是否在窗口內
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// 窗口天數（起訖相反時為 0）
    pub fn day_count(&self) -> usize {
        if self.end < self.start {
            return 0;
        }
        ((self.end - self.start).num_days() + 1) as usize
    }

    /// 依序列出窗口內每一天
    pub fn days(&self) -> Vec<NaiveDate> {
        self.start
            .iter_days()
            .take_while(|d| *d <= self.end)
            .collect()
    }
}

/// 圖表軸短標籤
pub fn short_label(date: NaiveDate) -> String {
    date.format(SHORT_LABEL_FORMAT).to_string()
}

/// 明細標題長標籤
pub fn long_label(date: NaiveDate) -> String {
    date.format(LONG_LABEL_FORMAT).to_string()
}
