//! 生產記錄模型

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 生產記錄（單一零件/子件在某日的目標與實際產量）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionRecord {
    /// 記錄ID（日期-類別-零件-子件-序號）
    pub id: String,

    /// 生產日期（YYYY-MM-DD）
    pub date: NaiveDate,

    /// 零件類別
    pub part_category: String,

    /// 零件
    pub part: String,

    /// 子件
    pub sub_part: String,

    /// 目標產量
    pub target: u32,

    /// 實際產量（與目標獨立，可超過目標）
    pub actual: u32,
}

impl ProductionRecord {
    /// 創建新的生產記錄
    ///
    /// `sequence` 為當日序號，用於確保同一次產生中的ID唯一。
    pub fn new(
        date: NaiveDate,
        part_category: String,
        part: String,
        sub_part: String,
        target: u32,
        actual: u32,
        sequence: usize,
    ) -> Self {
        let id = Self::compose_id(date, &part_category, &part, &sub_part, sequence);
        Self {
            id,
            date,
            part_category,
            part,
            sub_part,
            target,
            actual,
        }
    }

    /// 組合記錄ID
    pub fn compose_id(
        date: NaiveDate,
        part_category: &str,
        part: &str,
        sub_part: &str,
        sequence: usize,
    ) -> String {
        format!(
            "{}-{}-{}-{}-{}",
            date.format("%Y-%m-%d"),
            part_category,
            part,
            sub_part,
            sequence
        )
    }

    /// 差異（實際 - 目標）
    pub fn delta(&self) -> i64 {
        i64::from(self.actual) - i64::from(self.target)
    }

    /// 是否低於目標
    pub fn is_below_target(&self) -> bool {
        self.actual < self.target
    }
}
