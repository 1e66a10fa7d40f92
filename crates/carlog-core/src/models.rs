//! Domain models for carlog

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single fuel refill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Refuel {
    pub id: i64,
    /// Calendar day of the refill; drives ordering and month attribution
    pub date: NaiveDate,
    pub odometer_km: f64,
    /// Missing when there was no receipt
    pub liters: Option<f64>,
    pub price_per_liter: Option<f64>,
    pub total_cost: Option<f64>,
    pub station: Option<String>,
    pub fuel_type: Option<String>,
    pub notes: Option<String>,
    /// Marks a full-to-full window boundary
    pub full_tank: bool,
    /// True for imported/seed rows; `carlog reset` only removes seeded = false
    pub seeded: bool,
    pub created_at: DateTime<Utc>,
}

/// A refuel to be inserted (no id or created_at yet)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRefuel {
    pub date: NaiveDate,
    pub odometer_km: f64,
    pub liters: Option<f64>,
    pub price_per_liter: Option<f64>,
    pub total_cost: Option<f64>,
    pub station: Option<String>,
    pub fuel_type: Option<String>,
    pub notes: Option<String>,
    pub full_tank: bool,
    pub seeded: bool,
}

/// A refuel together with its computed metrics
///
/// All four derived fields are optional: they need data that may be missing
/// (a previous record, liters, a cost) or only apply to the record that
/// closes a full-tank window (`km_per_liter`, `liters_per_100km`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RefuelDerived {
    pub refuel: Refuel,
    pub distance_since_prev_km: Option<f64>,
    /// Fuel efficiency over the full-to-full window this record closes
    pub km_per_liter: Option<f64>,
    /// Consumption rate, the inverse-scaled form of `km_per_liter`
    pub liters_per_100km: Option<f64>,
    pub cost_per_km: Option<f64>,
}

/// Per-month aggregate over all full-to-full windows closing in that month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyStat {
    /// Zero-padded "YYYY-MM"; unique key, sorts most-recent-first descending
    pub month_key: String,
    pub total_spent: f64,
    pub total_liters: f64,
    pub total_distance_km: f64,
    /// Weighted average: total distance / total liters
    pub avg_km_per_liter: Option<f64>,
}

/// A maintenance event (oil change, tires, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceTask {
    pub id: i64,
    pub title: String,
    pub details: Option<String>,
    pub date: NaiveDate,
    pub odometer_km: Option<f64>,
    pub cost: Option<f64>,
    pub materials: Option<String>,
    pub next_due_date: Option<NaiveDate>,
    pub next_due_odometer_km: Option<f64>,
    pub created_at: DateTime<Utc>,
}

/// A maintenance task to be inserted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMaintenanceTask {
    pub title: String,
    pub details: Option<String>,
    pub date: NaiveDate,
    pub odometer_km: Option<f64>,
    pub cost: Option<f64>,
    pub materials: Option<String>,
    pub next_due_date: Option<NaiveDate>,
    pub next_due_odometer_km: Option<f64>,
}
