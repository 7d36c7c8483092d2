//! 圖表序列模型

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::calendar::{short_label, DateWindow};
use crate::record::ProductionRecord;

/// 子件目標/實際合計
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubPartTotals {
    pub target: u64,
    pub actual: u64,
}

impl SubPartTotals {
    /// 累加一筆記錄
    pub fn add_record(&mut self, record: &ProductionRecord) {
        self.target += u64::from(record.target);
        self.actual += u64::from(record.actual);
    }

    /// 差異（實際 - 目標）
    pub fn delta(&self) -> i64 {
        self.actual as i64 - self.target as i64
    }
}

/// 圖表資料點（每日一筆）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeriesPoint {
    /// 日期
    pub date: NaiveDate,

    /// 軸標籤
    pub formatted_date: String,

    /// 各子件合計（包含所有子件，無資料時為 0）
    pub values: BTreeMap<String, SubPartTotals>,
}

impl ChartSeriesPoint {
    /// 創建零值資料點
    pub fn zeroed<'a, I>(date: NaiveDate, sub_parts: I) -> Self
    where
        I: IntoIterator<Item = &'a String>,
    {
        Self {
            date,
            formatted_date: short_label(date),
            values: sub_parts
                .into_iter()
                .map(|s| (s.clone(), SubPartTotals::default()))
                .collect(),
        }
    }

    /// 取得子件合計
    pub fn totals(&self, sub_part: &str) -> Option<SubPartTotals> {
        self.values.get(sub_part).copied()
    }

    /// 當日所有子件合計
    pub fn day_totals(&self) -> SubPartTotals {
        self.values
            .values()
            .fold(SubPartTotals::default(), |acc, t| SubPartTotals {
                target: acc.target + t.target,
                actual: acc.actual + t.actual,
            })
    }

    /// 攤平成 `<subPart>_target` / `<subPart>_actual` 欄位（供圖表元件使用）
    pub fn to_flat_json(&self) -> Value {
        let mut map = Map::new();
        map.insert(
            "date".to_string(),
            Value::String(self.date.format("%Y-%m-%d").to_string()),
        );
        map.insert(
            "formattedDate".to_string(),
            Value::String(self.formatted_date.clone()),
        );
        for (sub_part, totals) in &self.values {
            map.insert(format!("{sub_part}_target"), Value::from(totals.target));
            map.insert(format!("{sub_part}_actual"), Value::from(totals.actual));
        }
        Value::Object(map)
    }
}

/// 圖表序列（窗口內每日一點，無缺口）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    /// 日期窗口
    pub window: DateWindow,

    /// 出現於篩選資料中的子件（排序後）
    pub sub_parts: Vec<String>,

    /// 資料點
    pub points: Vec<ChartSeriesPoint>,
}

impl ChartSeries {
    /// 資料點數量
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// 找出指定日期的資料點
    pub fn point(&self, date: NaiveDate) -> Option<&ChartSeriesPoint> {
        self.points.iter().find(|p| p.date == date)
    }

    /// 攤平所有資料點
    pub fn to_flat_json(&self) -> Vec<Value> {
        self.points.iter().map(ChartSeriesPoint::to_flat_json).collect()
    }
}
