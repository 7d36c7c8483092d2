//! 記錄篩選

use chrono::NaiveDate;
use prod_core::{DateWindow, FilterSpec, ProductionRecord};

/// 篩選計算器
pub struct FilterEvaluator;

impl FilterEvaluator {
    /// 依篩選條件取出符合的記錄（保留原順序）
    ///
    /// 類別、零件、日期窗口三者為 AND 關係；無符合記錄時回傳空集合。
    pub fn filter(
        records: &[ProductionRecord],
        spec: &FilterSpec,
        today: NaiveDate,
    ) -> Vec<ProductionRecord> {
        let window = DateWindow::for_range(spec.date_range, today);

        records
            .iter()
            .filter(|r| Self::matches(r, spec, &window))
            .cloned()
            .collect()
    }

    /// 檢查單筆記錄是否符合
    pub fn matches(record: &ProductionRecord, spec: &FilterSpec, window: &DateWindow) -> bool {
        if let Some(category) = spec.category_filter() {
            if record.part_category != category {
                return false;
            }
        }

        if let Some(part) = spec.part_filter() {
            if record.part != part {
                return false;
            }
        }

        window.contains(record.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prod_core::DateRange;
    use proptest::prelude::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        ymd(2024, 3, 10)
    }

    fn record(date: NaiveDate, category: &str, part: &str, seq: usize) -> ProductionRecord {
        ProductionRecord::new(
            date,
            category.to_string(),
            part.to_string(),
            "WASHER".to_string(),
            100,
            90,
            seq,
        )
    }

    fn sample_records() -> Vec<ProductionRecord> {
        vec![
            record(ymd(2024, 2, 8), "A033070030", "SAFETY WIRE", 0),
            record(ymd(2024, 2, 9), "A033070030", "SAFETY WIRE", 0),
            record(ymd(2024, 3, 2), "B044050015", "VALVE ASSEMBLY", 0),
            record(ymd(2024, 3, 3), "A033070030", "VALVE ASSEMBLY", 0),
            record(ymd(2024, 3, 10), "A033070030", "SAFETY WIRE", 0),
            record(ymd(2024, 3, 10), "B044050015", "SAFETY WIRE", 1),
            record(ymd(2024, 3, 11), "A033070030", "SAFETY WIRE", 0),
        ]
    }

    #[test]
    fn test_default_filter_keeps_30_day_window() {
        let filtered = FilterEvaluator::filter(&sample_records(), &FilterSpec::new(), today());

        // 2/8 與未來日期 3/11 被排除，2/9 為窗口起始日
        assert_eq!(filtered.len(), 5);
        assert_eq!(filtered[0].date, ymd(2024, 2, 9));
        assert!(filtered.iter().all(|r| r.date <= today()));
    }

    #[test]
    fn test_seven_day_window() {
        let spec = FilterSpec::new().with_date_range(DateRange::Last7Days);
        let filtered = FilterEvaluator::filter(&sample_records(), &spec, today());

        assert_eq!(filtered.len(), 3);
        assert_eq!(filtered[0].date, ymd(2024, 3, 3));
    }

    #[test]
    fn test_custom_range_falls_back_to_30_days() {
        let custom = FilterSpec::new().with_date_range(DateRange::Custom);
        assert_eq!(
            FilterEvaluator::filter(&sample_records(), &custom, today()),
            FilterEvaluator::filter(&sample_records(), &FilterSpec::new(), today())
        );
    }

    #[test]
    fn test_category_and_part() {
        let spec = FilterSpec::new()
            .with_part_category("A033070030")
            .with_part("SAFETY WIRE");
        let filtered = FilterEvaluator::filter(&sample_records(), &spec, today());

        assert_eq!(filtered.len(), 2);
        assert!(filtered
            .iter()
            .all(|r| r.part_category == "A033070030" && r.part == "SAFETY WIRE"));
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let spec = FilterSpec::new().with_part_category("Z999");
        assert!(FilterEvaluator::filter(&sample_records(), &spec, today()).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let spec = FilterSpec::new().with_part("SAFETY WIRE");
        let once = FilterEvaluator::filter(&sample_records(), &spec, today());
        let twice = FilterEvaluator::filter(&once, &spec, today());

        assert_eq!(once, twice);
    }

    fn arb_record() -> impl Strategy<Value = ProductionRecord> {
        (0i64..45, 0usize..3, 0usize..3, 0u32..300, 0u32..300).prop_map(
            |(offset, category, part, target, actual)| {
                ProductionRecord::new(
                    today() - chrono::Duration::days(offset - 5),
                    format!("CAT-{category}"),
                    format!("PART-{part}"),
                    "SUB".to_string(),
                    target,
                    actual,
                    0,
                )
            },
        )
    }

    fn arb_spec() -> impl Strategy<Value = FilterSpec> {
        (
            prop_oneof![Just(String::new()), (0usize..4).prop_map(|c| format!("CAT-{c}"))],
            prop_oneof![Just(String::new()), (0usize..4).prop_map(|p| format!("PART-{p}"))],
            prop_oneof![
                Just(DateRange::Last7Days),
                Just(DateRange::Last30Days),
                Just(DateRange::Custom)
            ],
        )
            .prop_map(|(category, part, range)| {
                FilterSpec::new()
                    .with_part_category(category)
                    .with_part(part)
                    .with_date_range(range)
            })
    }

    proptest! {
        #[test]
        fn filter_idempotent(records in prop::collection::vec(arb_record(), 0..60), spec in arb_spec()) {
            let once = FilterEvaluator::filter(&records, &spec, today());
            let twice = FilterEvaluator::filter(&once, &spec, today());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn filter_order_independent(records in prop::collection::vec(arb_record(), 0..60), spec in arb_spec()) {
            let combined = FilterEvaluator::filter(&records, &spec, today());

            let by_category = FilterEvaluator::filter(
                &records,
                &FilterSpec::new().with_part_category(spec.part_category.clone()).with_date_range(spec.date_range),
                today(),
            );
            let then_part = FilterEvaluator::filter(&by_category, &spec, today());

            prop_assert_eq!(combined, then_part);
        }
    }
}
