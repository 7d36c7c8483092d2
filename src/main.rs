//! 生產看板命令列工具
//!
//! 組合根：載入或產生記錄，依篩選條件輸出圖表序列、每日明細或完整快照。

mod cli;
mod logging;

use std::fs;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use prod_calc::{DashboardCalculator, DashboardSnapshot, DataGenerator};
use prod_core::{parse_date, GeneratorConfig, ProductionRecord};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::cli::{Cli, Commands, SourceArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init();

    let today = resolve_today(&cli.source)?;
    let records = load_records(&cli.source, today)?;
    let calculator = DashboardCalculator::new(records, today);

    match cli.command {
        Commands::Generate => print_json(&calculator.records(), cli.pretty),
        Commands::Chart { filter, flat } => {
            let result = calculator.calculate(&filter.to_spec(), None);
            if flat {
                print_json(&result.series.to_flat_json(), cli.pretty)
            } else {
                print_json(&result.series, cli.pretty)
            }
        }
        Commands::Breakdown { filter, date } => {
            let date = parse_date(&date).context("--date 格式錯誤")?;
            let result = calculator.calculate(&filter.to_spec(), Some(date));
            let breakdown = result
                .breakdown
                .context("選定日期後應產生明細")?;
            tracing::info!(
                "{} 明細 {} 筆，整日績效 {:?}",
                breakdown.formatted_date,
                breakdown.sub_parts.len(),
                breakdown.overall_performance()
            );
            print_json(&breakdown, cli.pretty)
        }
        Commands::Snapshot { filter, date } => {
            let date = date
                .as_deref()
                .map(parse_date)
                .transpose()
                .context("--date 格式錯誤")?;
            let snapshot = DashboardSnapshot::build(&calculator, &filter.to_spec(), date);
            println!("{}", snapshot.to_json(cli.pretty)?);
            Ok(())
        }
    }
}

fn resolve_today(source: &SourceArgs) -> Result<NaiveDate> {
    match source.today.as_deref() {
        Some(text) => parse_date(text).context("--today 格式錯誤"),
        None => Ok(Local::now().date_naive()),
    }
}

fn load_records(source: &SourceArgs, today: NaiveDate) -> Result<Vec<ProductionRecord>> {
    if let Some(path) = &source.input {
        // 環境變數也可能帶入這兩項，僅提示不中止
        if let Some(config) = &source.config {
            tracing::warn!("已指定 --input，忽略產生器配置 {}", config.display());
        }
        if source.seed.is_some() {
            tracing::warn!("已指定 --input，忽略 --seed");
        }

        let text = fs::read_to_string(path)
            .with_context(|| format!("無法讀取記錄檔 {}", path.display()))?;
        let records: Vec<ProductionRecord> = serde_json::from_str(&text)
            .with_context(|| format!("記錄檔格式錯誤 {}", path.display()))?;
        tracing::info!("從 {} 載入記錄 {} 筆", path.display(), records.len());
        return Ok(records);
    }

    let mut config = match &source.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("無法讀取配置檔 {}", path.display()))?;
            GeneratorConfig::from_json(&text)
                .with_context(|| format!("配置檔無效 {}", path.display()))?
        }
        None => GeneratorConfig::default(),
    };
    if let Some(days) = source.days {
        config = config.with_days(days);
    }

    let generator = DataGenerator::new(config)?;
    let mut rng = match source.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let records = generator.generate(today, &mut rng);
    tracing::info!("產生記錄 {} 筆（截至 {}）", records.len(), today);

    Ok(records)
}

fn print_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
