//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_db` - Shared utility to open the database
//! - `parse_date_or_today` - Date flag handling for add/edit commands
//! - `cmd_init` - Initialize the database
//! - `cmd_status` - Show database status
//! - `cmd_reset` - Delete user-entered refuels

use std::path::Path;

use anyhow::{Context, Result};
use carlog_core::{db::Database, stats::recompute_monthly_stats};
use chrono::NaiveDate;
use tracing::debug;

/// Open the database at the given path
pub fn open_db(db_path: &Path) -> Result<Database> {
    let path_str = db_path
        .to_str()
        .context("Database path is not valid UTF-8")?;
    debug!("Opening database at {}", path_str);
    Database::new(path_str).context("Failed to open database")
}

/// Parse a YYYY-MM-DD flag, defaulting to today when absent
pub fn parse_date_or_today(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .context("Invalid date format (use YYYY-MM-DD)"),
        None => Ok(chrono::Utc::now().date_naive()),
    }
}

pub fn cmd_init(db_path: &Path) -> Result<()> {
    println!("🔧 Initializing database at {}...", db_path.display());

    let _db = open_db(db_path)?;

    println!("✅ Database initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. Record a refuel:    carlog add --odometer 41200 --liters 38.5");
    println!("  2. Import a log:       carlog import --file refuels.csv");
    println!("  3. See monthly stats:  carlog stats");

    Ok(())
}

pub fn cmd_status(db: &Database) -> Result<()> {
    println!("📋 Database: {}", db.path());
    println!("   Refuels:           {}", db.count_refuels()?);
    println!("   Maintenance tasks: {}", db.count_maintenance_tasks()?);
    println!("   Months with stats: {}", db.list_monthly_stats()?.len());

    if let Some(last) = db.last_refuel()? {
        println!();
        println!(
            "   Last refuel: {} at {:.0} km{}",
            last.date,
            last.odometer_km,
            last.station
                .map(|s| format!(" ({})", s))
                .unwrap_or_default()
        );
    }

    Ok(())
}

pub fn cmd_reset(db: &Database, yes: bool) -> Result<()> {
    if !yes {
        println!("This deletes all user-entered refuels (imported/seed rows are kept).");
        println!("Re-run with --yes to confirm.");
        return Ok(());
    }

    let deleted = db.delete_user_refuels()?;
    recompute_monthly_stats(db)?;
    println!("🗑️  Deleted {} user-entered refuels", deleted);
    Ok(())
}
