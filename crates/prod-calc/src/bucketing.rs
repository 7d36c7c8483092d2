//! 每日分桶

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use prod_core::{DateWindow, ProductionRecord};

/// 時間分桶計算器
pub struct BucketingCalculator;

impl BucketingCalculator {
    /// 創建窗口內的每日時間桶（不論是否有資料）
    pub fn create_daily_buckets(window: &DateWindow) -> Vec<NaiveDate> {
        window.days()
    }

    /// 按日期分組記錄
    pub fn group_by_day(records: &[ProductionRecord]) -> BTreeMap<NaiveDate, Vec<&ProductionRecord>> {
        let mut groups: BTreeMap<NaiveDate, Vec<&ProductionRecord>> = BTreeMap::new();
        for record in records {
            groups.entry(record.date).or_default().push(record);
        }
        groups
    }

    /// 收集記錄中出現過的子件（排序、去重）
    pub fn distinct_sub_parts(records: &[ProductionRecord]) -> Vec<String> {
        records
            .iter()
            .map(|r| r.sub_part.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}
