//! Maintenance task command implementations

use anyhow::{Context, Result};
use carlog_core::db::Database;
use carlog_core::models::NewMaintenanceTask;
use chrono::NaiveDate;

use super::core::parse_date_or_today;
use super::{fmt_opt, truncate};

pub fn cmd_maintenance_list(db: &Database) -> Result<()> {
    let tasks = db.list_maintenance_tasks()?;
    if tasks.is_empty() {
        println!("No maintenance tasks yet. Add one with: carlog maintenance add \"Oil change\"");
        return Ok(());
    }

    println!(
        "{:>5} {:>12} {:>10} {:>10} {:>12}  {}",
        "ID", "Date", "Odometer", "Cost", "Next due", "Title"
    );
    println!("{}", "─".repeat(80));
    for t in &tasks {
        println!(
            "{:>5} {:>12} {:>10} {:>10} {:>12}  {}",
            t.id,
            t.date.to_string(),
            fmt_opt(t.odometer_km, 0),
            fmt_opt(t.cost, 2),
            t.next_due_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string()),
            truncate(&t.title, 32),
        );
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn cmd_maintenance_add(
    db: &Database,
    title: &str,
    date: Option<&str>,
    details: Option<String>,
    odometer: Option<f64>,
    cost: Option<f64>,
    materials: Option<String>,
    next_due: Option<&str>,
    next_due_odometer: Option<f64>,
) -> Result<()> {
    let next_due_date = next_due
        .map(|s| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .context("Invalid --next-due date format (use YYYY-MM-DD)")
        })
        .transpose()?;

    let task = NewMaintenanceTask {
        title: title.to_string(),
        details,
        date: parse_date_or_today(date)?,
        odometer_km: odometer,
        cost,
        materials,
        next_due_date,
        next_due_odometer_km: next_due_odometer,
    };

    let id = db
        .insert_maintenance_task(&task)
        .context("Failed to save maintenance task")?;
    println!("🔧 Recorded maintenance task {} ({})", id, title);
    Ok(())
}

pub fn cmd_maintenance_delete(db: &Database, id: i64) -> Result<()> {
    db.delete_maintenance_task(id)?;
    println!("🗑️  Deleted maintenance task {}", id);
    Ok(())
}
