//! # Production Core
//!
//! 生產看板核心資料模型與類型定義

pub mod breakdown;
pub mod calendar;
pub mod config;
pub mod filter;
pub mod record;
pub mod series;

// Re-export 主要類型
pub use breakdown::{DailyBreakdown, Performance, SubPartSummary};
pub use calendar::{parse_date, DateWindow};
pub use config::{GeneratorConfig, MAX_VARIANCE_PERCENT};
pub use filter::{DateRange, FilterSpec};
pub use record::ProductionRecord;
pub use series::{ChartSeries, ChartSeriesPoint, SubPartTotals};

/// 生產看板錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum ProductionError {
    #[error("無效的日期: {0}")]
    InvalidDate(String),

    #[error("無效的產生器配置: {0}")]
    InvalidConfig(String),

    #[error("序列化錯誤: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ProductionError>;
