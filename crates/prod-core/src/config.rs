//! 資料產生器配置

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ProductionError, Result};

/// 預設零件類別
pub const DEFAULT_PART_CATEGORIES: [&str; 5] = [
    "A033070030",
    "A033080011",
    "A033070003",
    "B044050015",
    "C055060020",
];

/// 預設零件
pub const DEFAULT_PARTS: [&str; 7] = [
    "SAFETY WIRE",
    "BRAKE SHOE KEY TYPE A",
    "PEN SWING LINK",
    "HYDRAULIC CYLINDER",
    "VALVE ASSEMBLY",
    "BEARING HOUSING",
    "SHAFT COUPLING",
];

/// 預設子件
pub const DEFAULT_SUB_PARTS: [&str; 10] = [
    "LOCKING METAL",
    "THIMBLE",
    "WASHER",
    "SEAL RING",
    "FASTENER",
    "CONNECTOR",
    "BRACKET",
    "MOUNTING PLATE",
    "O-RING",
    "BUSHING",
];

/// 變動幅度上限（百分比）
pub const MAX_VARIANCE_PERCENT: Decimal = Decimal::ONE_HUNDRED;

/// 生產資料產生器配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// 產生天數（含今天）
    pub days: u32,

    /// 每日最少記錄數
    pub min_entries_per_day: u32,

    /// 每日最多記錄數
    pub max_entries_per_day: u32,

    /// 目標產量下限
    pub min_target: u32,

    /// 目標產量上限
    pub max_target: u32,

    /// 實際產量相對目標的變動幅度（百分比）
    pub variance_percent: Decimal,

    /// 零件類別詞彙
    pub part_categories: Vec<String>,

    /// 零件詞彙
    pub parts: Vec<String>,

    /// 子件詞彙
    pub sub_parts: Vec<String>,
}

impl GeneratorConfig {
    /// 創建預設配置（30 天，參考詞彙）
    pub fn new() -> Self {
        Self {
            days: 30,
            min_entries_per_day: 5,
            max_entries_per_day: 12,
            min_target: 50,
            max_target: 200,
            variance_percent: Decimal::from(20),
            part_categories: to_owned_vec(&DEFAULT_PART_CATEGORIES),
            parts: to_owned_vec(&DEFAULT_PARTS),
            sub_parts: to_owned_vec(&DEFAULT_SUB_PARTS),
        }
    }

    /// 建構器模式：設置天數
    pub fn with_days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    /// 建構器模式：設置每日記錄數範圍
    pub fn with_entries_per_day(mut self, min: u32, max: u32) -> Self {
        self.min_entries_per_day = min;
        self.max_entries_per_day = max;
        self
    }

    /// 建構器模式：設置目標產量範圍
    pub fn with_target_range(mut self, min: u32, max: u32) -> Self {
        self.min_target = min;
        self.max_target = max;
        self
    }

    /// 建構器模式：設置變動幅度
    pub fn with_variance_percent(mut self, percent: Decimal) -> Self {
        self.variance_percent = percent;
        self
    }

    /// 建構器模式：設置詞彙
    pub fn with_vocabularies(
        mut self,
        part_categories: Vec<String>,
        parts: Vec<String>,
        sub_parts: Vec<String>,
    ) -> Self {
        self.part_categories = part_categories;
        self.parts = parts;
        self.sub_parts = sub_parts;
        self
    }

    /// 從 JSON 載入配置（缺少的欄位使用預設值）
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 檢查配置是否可用
    pub fn validate(&self) -> Result<()> {
        if self.days == 0 {
            return Err(ProductionError::InvalidConfig("天數必須至少為 1".to_string()));
        }
        if self.min_entries_per_day > self.max_entries_per_day {
            return Err(ProductionError::InvalidConfig(format!(
                "每日記錄數範圍無效: {}..={}",
                self.min_entries_per_day, self.max_entries_per_day
            )));
        }
        if self.min_target > self.max_target {
            return Err(ProductionError::InvalidConfig(format!(
                "目標產量範圍無效: {}..={}",
                self.min_target, self.max_target
            )));
        }
        if self.variance_percent.is_sign_negative() {
            return Err(ProductionError::InvalidConfig(format!(
                "變動幅度不可為負: {}",
                self.variance_percent
            )));
        }
        if self.variance_percent > MAX_VARIANCE_PERCENT {
            return Err(ProductionError::InvalidConfig(format!(
                "變動幅度超過 {MAX_VARIANCE_PERCENT}%: {}",
                self.variance_percent
            )));
        }

        let vocabularies = [
            ("part_categories", &self.part_categories),
            ("parts", &self.parts),
            ("sub_parts", &self.sub_parts),
        ];
        for (name, values) in vocabularies {
            if values.is_empty() {
                return Err(ProductionError::InvalidConfig(format!("詞彙 {name} 不可為空")));
            }
        }

        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn to_owned_vec(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
