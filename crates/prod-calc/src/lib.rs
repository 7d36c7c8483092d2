//! # Production Calculation Engine
//!
//! 生產看板計算引擎：資料產生、篩選、序列彙總、每日明細

pub mod aggregation;
pub mod breakdown;
pub mod bucketing;
pub mod calculator;
pub mod filtering;
pub mod generator;
pub mod options;
pub mod snapshot;
pub mod statistics;

// Re-export 主要類型
pub use aggregation::SeriesAggregator;
pub use breakdown::BreakdownSummarizer;
pub use calculator::DashboardCalculator;
pub use filtering::FilterEvaluator;
pub use generator::DataGenerator;
pub use options::FilterOptions;
pub use snapshot::DashboardSnapshot;
pub use statistics::{DashboardStatistics, DataSummary};

/// 看板計算結果
#[derive(Debug, Clone)]
pub struct DashboardResult {
    /// 使用的篩選條件
    pub filter: prod_core::FilterSpec,

    /// 篩選後記錄（序列與明細共用）
    pub filtered: Vec<prod_core::ProductionRecord>,

    /// 圖表序列
    pub series: prod_core::ChartSeries,

    /// 每日明細（有選定日期時）
    pub breakdown: Option<prod_core::DailyBreakdown>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl DashboardResult {
    /// 篩選後是否無資料
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }
}
