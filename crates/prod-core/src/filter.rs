//! 篩選條件模型

use serde::{Deserialize, Serialize};

/// 日期範圍
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DateRange {
    /// 最近 7 天
    #[serde(rename = "7days")]
    Last7Days,
    /// 最近 30 天
    #[default]
    #[serde(rename = "30days")]
    Last30Days,
    /// 自訂範圍（未定義起訖時退回 30 天）
    #[serde(rename = "custom")]
    Custom,
}

impl DateRange {
    /// 從今天往回推算的天數
    pub fn lookback_days(self) -> i64 {
        match self {
            DateRange::Last7Days => 7,
            DateRange::Last30Days | DateRange::Custom => 30,
        }
    }

    /// 從文字解析（7days / 30days / custom）
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim() {
            "7days" => Some(DateRange::Last7Days),
            "30days" => Some(DateRange::Last30Days),
            "custom" => Some(DateRange::Custom),
            _ => None,
        }
    }

    /// 文字代碼
    pub fn as_str(self) -> &'static str {
        match self {
            DateRange::Last7Days => "7days",
            DateRange::Last30Days => "30days",
            DateRange::Custom => "custom",
        }
    }
}

/// 看板篩選條件
///
/// 空字串代表不篩選該欄位。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSpec {
    /// 零件類別
    pub part_category: String,

    /// 零件
    pub part: String,

    /// 日期範圍
    pub date_range: DateRange,
}

impl FilterSpec {
    /// 創建不篩選的條件（最近 30 天）
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：設置零件類別
    pub fn with_part_category(mut self, part_category: impl Into<String>) -> Self {
        self.part_category = part_category.into();
        self
    }

    /// 建構器模式：設置零件
    pub fn with_part(mut self, part: impl Into<String>) -> Self {
        self.part = part.into();
        self
    }

    /// 建構器模式：設置日期範圍
    pub fn with_date_range(mut self, date_range: DateRange) -> Self {
        self.date_range = date_range;
        self
    }

    /// 切換零件類別（同時清除零件選擇）
    pub fn select_part_category(&mut self, part_category: impl Into<String>) {
        self.part_category = part_category.into();
        self.part.clear();
    }

    /// 類別篩選（空字串視為未設置）
    pub fn category_filter(&self) -> Option<&str> {
        Some(self.part_category.as_str()).filter(|s| !s.is_empty())
    }

    /// 零件篩選（空字串視為未設置）
    pub fn part_filter(&self) -> Option<&str> {
        Some(self.part.as_str()).filter(|s| !s.is_empty())
    }
}
