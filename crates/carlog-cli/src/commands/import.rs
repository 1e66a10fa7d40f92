//! CSV import command

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use carlog_core::db::Database;
use carlog_core::import::parse_refuel_csv;
use carlog_core::stats::recompute_monthly_stats;

pub fn cmd_import(db: &Database, file: &Path) -> Result<()> {
    println!("📥 Importing refuels from {}...", file.display());

    let reader = File::open(file)
        .with_context(|| format!("Failed to open {}", file.display()))?;
    let rows = parse_refuel_csv(reader).context("Failed to read CSV")?;

    for row in &rows {
        db.insert_refuel(row)?;
    }
    let stats = recompute_monthly_stats(db)?;

    println!("✅ Imported {} refuels", rows.len());
    println!("   Monthly stats cover {} months", stats.len());
    Ok(())
}
