//! 命令列參數

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use prod_core::{DateRange, FilterSpec};

#[derive(Parser, Debug)]
#[command(
    name = "production-dashboard",
    version,
    about = "Manufacturing production dashboard engine: target vs. actual per part and day"
)]
pub struct Cli {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// 資料來源參數
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Read records from a JSON file instead of generating them
    #[arg(long, global = true)]
    pub input: Option<PathBuf>,

    /// Generator configuration file (JSON)
    #[arg(long, global = true, env = "DASHBOARD_GENERATOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of trailing days to generate (overrides the config file)
    #[arg(long, global = true, conflicts_with = "input")]
    pub days: Option<u32>,

    /// Seed for reproducible generation
    #[arg(long, global = true, env = "DASHBOARD_SEED")]
    pub seed: Option<u64>,

    /// Reference date (YYYY-MM-DD), defaults to the local date
    #[arg(long, global = true, env = "DASHBOARD_TODAY")]
    pub today: Option<String>,
}

/// 篩選參數
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Part category (empty = all)
    #[arg(long, default_value = "")]
    pub category: String,

    /// Part (empty = all)
    #[arg(long, default_value = "")]
    pub part: String,

    /// Date range: 7days, 30days or custom
    #[arg(long, default_value = "30days", value_parser = parse_date_range)]
    pub range: DateRange,
}

impl FilterArgs {
    pub fn to_spec(&self) -> FilterSpec {
        FilterSpec::new()
            .with_part_category(self.category.clone())
            .with_part(self.part.clone())
            .with_date_range(self.range)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the record collection
    Generate,

    /// Print the dense chart series for the filters
    Chart {
        #[command(flatten)]
        filter: FilterArgs,

        /// Flatten sub-parts into <subPart>_target / <subPart>_actual keys
        #[arg(long)]
        flat: bool,
    },

    /// Print the breakdown of one day
    Breakdown {
        #[command(flatten)]
        filter: FilterArgs,

        /// Selected date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },

    /// Print the full dashboard document
    Snapshot {
        #[command(flatten)]
        filter: FilterArgs,

        /// Optional selected date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
}

fn parse_date_range(text: &str) -> Result<DateRange, String> {
    DateRange::parse(text).ok_or_else(|| format!("unknown date range '{text}' (7days, 30days, custom)"))
}
