//! Monthly stats command

use anyhow::Result;
use carlog_core::db::Database;

use super::fmt_opt;

pub fn cmd_stats(db: &Database, json: bool) -> Result<()> {
    let stats = db.list_monthly_stats()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    if stats.is_empty() {
        println!("No monthly stats yet. They appear once a full-to-full window closes.");
        return Ok(());
    }

    println!(
        "{:>8} {:>10} {:>10} {:>10} {:>10}",
        "Month", "Spent", "Liters", "Dist km", "km/L"
    );
    println!("{}", "─".repeat(52));
    for s in &stats {
        println!(
            "{:>8} {:>10.2} {:>10.1} {:>10.0} {:>10}",
            s.month_key,
            s.total_spent,
            s.total_liters,
            s.total_distance_km,
            fmt_opt(s.avg_km_per_liter, 1),
        );
    }
    Ok(())
}
