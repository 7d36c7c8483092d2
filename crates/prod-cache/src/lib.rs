//! # Production Cache
//!
//! 緩存與增量計算模組

pub mod dirty_tracking;
pub mod incremental;

// Re-export 主要類型
pub use dirty_tracking::{DashboardView, DirtyTracker};
pub use incremental::DashboardSession;
