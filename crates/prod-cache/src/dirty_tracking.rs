//! 髒標記追蹤

use std::collections::HashSet;

/// 看板衍生視圖
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashboardView {
    /// 篩選後記錄
    Filtered,
    /// 圖表序列
    Series,
    /// 每日明細
    Breakdown,
}

impl DashboardView {
    pub const ALL: [DashboardView; 3] = [
        DashboardView::Filtered,
        DashboardView::Series,
        DashboardView::Breakdown,
    ];
}

/// 髒標記追蹤器
pub struct DirtyTracker {
    dirty_views: HashSet<DashboardView>,
}

impl DirtyTracker {
    /// 創建新的追蹤器（所有視圖皆為髒）
    pub fn new() -> Self {
        Self {
            dirty_views: DashboardView::ALL.into_iter().collect(),
        }
    }

    /// 標記視圖為髒
    pub fn mark_dirty(&mut self, view: DashboardView) {
        self.dirty_views.insert(view);
    }

    /// 篩選條件變更：所有視圖失效
    pub fn mark_filter_changed(&mut self) {
        self.dirty_views.extend(DashboardView::ALL);
    }

    /// 檢查視圖是否為髒
    pub fn is_dirty(&self, view: DashboardView) -> bool {
        self.dirty_views.contains(&view)
    }

    /// 清除單一視圖的髒標記
    pub fn clear_view(&mut self, view: DashboardView) {
        self.dirty_views.remove(&view);
    }

    /// 清除所有髒標記
    pub fn clear(&mut self) {
        self.dirty_views.clear();
    }

    /// 獲取所有髒視圖
    pub fn get_dirty_views(&self) -> Vec<DashboardView> {
        DashboardView::ALL
            .into_iter()
            .filter(|v| self.dirty_views.contains(v))
            .collect()
    }
}

impl Default for DirtyTracker {
    fn default() -> Self {
        Self::new()
    }
}
