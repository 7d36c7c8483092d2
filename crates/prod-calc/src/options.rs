//! 篩選選項

use std::collections::BTreeSet;

use prod_core::ProductionRecord;
use serde::{Deserialize, Serialize};

/// 篩選下拉選項（排序、去重）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub part_categories: Vec<String>,
    pub parts: Vec<String>,
    pub sub_parts: Vec<String>,
}

impl FilterOptions {
    /// 從記錄集合收集選項
    pub fn from_records(records: &[ProductionRecord]) -> Self {
        Self {
            part_categories: sorted_unique(records.iter().map(|r| r.part_category.as_str())),
            parts: sorted_unique(records.iter().map(|r| r.part.as_str())),
            sub_parts: sorted_unique(records.iter().map(|r| r.sub_part.as_str())),
        }
    }
}

fn sorted_unique<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
