//! 生產資料產生器

use chrono::NaiveDate;
use prod_core::{DateWindow, GeneratorConfig, ProductionRecord};
use rand::seq::SliceRandom;
use rand::Rng;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// 資料產生器
///
/// 亂數來源由呼叫端注入；測試使用固定種子的 `StdRng` 即可重現。
pub struct DataGenerator {
    config: GeneratorConfig,
}

impl DataGenerator {
    /// 創建新的產生器（配置無效時回傳錯誤）
    pub fn new(config: GeneratorConfig) -> prod_core::Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// 取得配置
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// 產生截至 `today`（含）的最近 N 天資料，依日期排序
    pub fn generate<R: Rng + ?Sized>(&self, today: NaiveDate, rng: &mut R) -> Vec<ProductionRecord> {
        let window = DateWindow::trailing_days(self.config.days, today);
        let mut records = Vec::new();

        for date in window.days() {
            let entries = rng.gen_range(
                self.config.min_entries_per_day..=self.config.max_entries_per_day,
            );

            for sequence in 0..entries as usize {
                records.push(self.generate_record(date, sequence, rng));
            }
        }

        // 穩定排序：同日保留產生順序
        records.sort_by_key(|r| r.date);

        tracing::debug!(
            "產生生產記錄 {} 筆（{} 天，截至 {}）",
            records.len(),
            window.day_count(),
            today
        );

        records
    }

    fn generate_record<R: Rng + ?Sized>(
        &self,
        date: NaiveDate,
        sequence: usize,
        rng: &mut R,
    ) -> ProductionRecord {
        let part_category = pick(&self.config.part_categories, rng);
        let part = pick(&self.config.parts, rng);
        let sub_part = pick(&self.config.sub_parts, rng);
        let target = rng.gen_range(self.config.min_target..=self.config.max_target);
        let actual = self.generate_actual(target, rng);

        ProductionRecord::new(date, part_category, part, sub_part, target, actual, sequence)
    }

    /// 在目標 ±變動幅度 內取實際產量（下限為 0，四捨五入為整數）
    pub fn generate_actual<R: Rng + ?Sized>(&self, target: u32, rng: &mut R) -> u32 {
        let (low, high) = actual_bounds(target, self.config.variance_percent);
        rng.gen_range(low..=high)
    }
}

/// 實際產量的可能範圍
///
/// 溢位時下限取 0、上限取 `u32::MAX`。
pub fn actual_bounds(target: u32, variance_percent: Decimal) -> (u32, u32) {
    let target = Decimal::from(target);
    let variance = target
        .checked_mul(variance_percent)
        .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED));
    let Some(variance) = variance else {
        return (0, u32::MAX);
    };

    let low = target
        .checked_sub(variance)
        .map_or(Decimal::ZERO, |low| low.max(Decimal::ZERO));
    let high = target.checked_add(variance).map_or(u32::MAX, round_to_u32);

    (round_to_u32(low), high)
}

fn round_to_u32(value: Decimal) -> u32 {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(u32::MAX)
}

fn pick<R: Rng + ?Sized>(values: &[String], rng: &mut R) -> String {
    // 配置已驗證詞彙非空
    values.choose(rng).cloned().unwrap_or_default()
}
