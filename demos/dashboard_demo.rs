//! 生產看板示例

use chrono::NaiveDate;
use prod_cache::DashboardSession;
use prod_calc::{DataGenerator, FilterOptions};
use prod_core::{DateRange, GeneratorConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== 生產看板示例 ===\n");

    let today = NaiveDate::from_ymd_opt(2025, 11, 20).ok_or("日期無效")?;
    let generator = DataGenerator::new(GeneratorConfig::new())?;
    let records = generator.generate(today, &mut StdRng::seed_from_u64(42));

    let options = FilterOptions::from_records(&records);
    println!("記錄 {} 筆，類別 {:?}", records.len(), options.part_categories);

    let mut session = DashboardSession::new(records, today);
    if let Some(category) = options.part_categories.first() {
        session.select_part_category(category.clone());
    }
    session.select_date_range(DateRange::Last7Days);

    println!("\n最近 7 天（類別 {}）:", session.filter().part_category);
    for point in &session.series().points {
        let totals = point.day_totals();
        println!(
            "  - {}: 目標 {}, 實際 {}, 差異 {}",
            point.formatted_date,
            totals.target,
            totals.actual,
            totals.delta()
        );
    }

    session.select_date(today);
    if let Some(breakdown) = session.breakdown() {
        println!(
            "\n{} 明細（整日績效 {}）:",
            breakdown.formatted_date,
            breakdown.overall_performance().label()
        );
        for item in &breakdown.sub_parts {
            println!(
                "  - {} / {}: {} → {} ({:+}, {})",
                item.part,
                item.sub_part,
                item.target,
                item.actual,
                item.delta,
                item.performance.label()
            );
        }
    }

    Ok(())
}
