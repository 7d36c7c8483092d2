//! 看板統計

use std::collections::HashSet;

use chrono::NaiveDate;
use prod_core::ProductionRecord;
use serde::{Deserialize, Serialize};

use crate::options::FilterOptions;

/// 整體產量統計
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatistics {
    /// 統計涵蓋天數（視窗天數）
    pub total_days: usize,

    /// 出現過的子件數
    pub active_sub_parts: usize,

    pub total_target: u64,
    pub total_actual: u64,

    /// 實際合計 - 目標合計
    pub total_delta: i64,
}

impl DashboardStatistics {
    /// 計算記錄集合的統計
    pub fn from_records(records: &[ProductionRecord], total_days: usize) -> Self {
        let total_target: u64 = records.iter().map(|r| u64::from(r.target)).sum();
        let total_actual: u64 = records.iter().map(|r| u64::from(r.actual)).sum();
        let active_sub_parts = records
            .iter()
            .map(|r| r.sub_part.as_str())
            .collect::<HashSet<_>>()
            .len();

        Self {
            total_days,
            active_sub_parts,
            total_target,
            total_actual,
            total_delta: total_actual as i64 - total_target as i64,
        }
    }
}

/// 資料期間
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// 資料摘要
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSummary {
    pub total_records: usize,

    /// 最早與最晚日期（無資料時為 None）
    pub date_range: Option<DataPeriod>,

    pub unique_categories: usize,
    pub unique_parts: usize,
    pub unique_sub_parts: usize,
}

impl DataSummary {
    /// 由記錄與選項產生摘要
    pub fn from_records(records: &[ProductionRecord], options: &FilterOptions) -> Self {
        let start = records.iter().map(|r| r.date).min();
        let end = records.iter().map(|r| r.date).max();
        let date_range = start.zip(end).map(|(start, end)| DataPeriod { start, end });

        Self {
            total_records: records.len(),
            date_range,
            unique_categories: options.part_categories.len(),
            unique_parts: options.parts.len(),
            unique_sub_parts: options.sub_parts.len(),
        }
    }
}
