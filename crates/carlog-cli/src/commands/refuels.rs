//! Refuel command implementations

use anyhow::{Context, Result};
use carlog_core::db::Database;
use carlog_core::models::NewRefuel;
use carlog_core::stats::{compute_derived, recompute_monthly_stats};

use super::core::parse_date_or_today;
use super::{fmt_opt, truncate};

#[allow(clippy::too_many_arguments)]
pub fn cmd_add(
    db: &Database,
    date: Option<&str>,
    odometer: f64,
    liters: Option<f64>,
    price: Option<f64>,
    cost: Option<f64>,
    station: Option<String>,
    fuel_type: Option<String>,
    notes: Option<String>,
    full_tank: bool,
) -> Result<()> {
    let refuel = NewRefuel {
        date: parse_date_or_today(date)?,
        odometer_km: odometer,
        liters,
        price_per_liter: price,
        total_cost: cost,
        station,
        fuel_type,
        notes,
        full_tank,
        seeded: false,
    };

    let id = db.insert_refuel(&refuel).context("Failed to save refuel")?;
    recompute_monthly_stats(db)?;

    println!(
        "⛽ Recorded refuel {} on {} at {:.0} km{}",
        id,
        refuel.date,
        refuel.odometer_km,
        if refuel.full_tank { "" } else { " (partial)" }
    );
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn cmd_edit(
    db: &Database,
    id: i64,
    date: Option<&str>,
    odometer: Option<f64>,
    liters: Option<f64>,
    price: Option<f64>,
    cost: Option<f64>,
    station: Option<String>,
    fuel_type: Option<String>,
    notes: Option<String>,
    full_tank: Option<bool>,
) -> Result<()> {
    let existing = db
        .get_refuel(id)?
        .with_context(|| format!("Refuel {} not found", id))?;

    // Only the provided flags change; everything else stays as stored.
    let updated = NewRefuel {
        date: match date {
            Some(s) => parse_date_or_today(Some(s))?,
            None => existing.date,
        },
        odometer_km: odometer.unwrap_or(existing.odometer_km),
        liters: liters.or(existing.liters),
        price_per_liter: price.or(existing.price_per_liter),
        total_cost: cost.or(existing.total_cost),
        station: station.or(existing.station),
        fuel_type: fuel_type.or(existing.fuel_type),
        notes: notes.or(existing.notes),
        full_tank: full_tank.unwrap_or(existing.full_tank),
        seeded: existing.seeded,
    };

    db.update_refuel(id, &updated)?;
    recompute_monthly_stats(db)?;

    println!("✏️  Updated refuel {}", id);
    Ok(())
}

pub fn cmd_delete(db: &Database, id: i64) -> Result<()> {
    db.delete_refuel(id)?;
    recompute_monthly_stats(db)?;
    println!("🗑️  Deleted refuel {}", id);
    Ok(())
}

pub fn cmd_list(db: &Database, limit: usize) -> Result<()> {
    // Derived metrics need the full history; the limit only trims display.
    let refuels = db.list_refuels_ascending()?;
    if refuels.is_empty() {
        println!("No refuels recorded yet. Add one with: carlog add --odometer <km>");
        return Ok(());
    }

    let derived = compute_derived(&refuels);

    println!(
        "{:>5} {:>12} {:>10} {:>8} {:>9} {:>8} {:>9} {:>9}  {}",
        "ID", "Date", "Odometer", "Liters", "Dist km", "km/L", "L/100km", "$/km", "Station"
    );
    println!("{}", "─".repeat(96));
    for d in derived.iter().take(limit) {
        let r = &d.refuel;
        println!(
            "{:>5} {:>12} {:>10.0} {:>8} {:>9} {:>8} {:>9} {:>9}  {}{}",
            r.id,
            r.date.to_string(),
            r.odometer_km,
            fmt_opt(r.liters, 1),
            fmt_opt(d.distance_since_prev_km, 0),
            fmt_opt(d.km_per_liter, 1),
            fmt_opt(d.liters_per_100km, 1),
            fmt_opt(d.cost_per_km, 2),
            truncate(r.station.as_deref().unwrap_or("-"), 20),
            if r.full_tank { "" } else { " (partial)" }
        );
    }

    if derived.len() > limit {
        println!("... {} more (use --limit)", derived.len() - limit);
    }
    Ok(())
}
