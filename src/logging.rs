//! 日誌系統初始化
//!
//! 使用 tracing 和 tracing-subscriber，日誌輸出到 stderr，
//! stdout 保留給 JSON 結果。

use tracing_subscriber::{fmt, EnvFilter};

/// 初始化日誌系統
///
/// # 環境變數
/// - RUST_LOG: 日誌級別過濾器（預設: info）
///   例如: RUST_LOG=debug 或 RUST_LOG=prod_calc=trace
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .init();
}
