//! Fuel-efficiency engine
//!
//! Two pure computations over the full refuel list, plus the recompute
//! orchestration that stores monthly aggregates:
//!
//! - `compute_derived` - per-record metrics (distance since previous refill,
//!   cost per km) and, on the record closing a full-to-full window, fuel
//!   efficiency (km/L) and consumption (L/100km).
//! - `compute_monthly_stats` - full-to-full segments summed per calendar
//!   month, attributed to the month in which each window closes.
//!
//! Both tolerate input in any order and re-sort internally. Processing order
//! is ascending (date, id); `compute_derived` returns its output descending
//! (date, id) for display. Neither function errors on numeric input: missing
//! optionals stay absent, divisions by zero yield absent, and negative
//! odometer deltas clamp to zero.

use chrono::Datelike;
use tracing::info;

use crate::db::Database;
use crate::error::Result;
use crate::models::{MonthlyStat, Refuel, RefuelDerived};

/// Cost of a refill: explicit total, or liters x price when both are known.
fn effective_cost(r: &Refuel) -> Option<f64> {
    r.total_cost.or(match (r.liters, r.price_per_liter) {
        (Some(liters), Some(price)) => Some(liters * price),
        _ => None,
    })
}

/// Zero-padded "YYYY-MM" key for a date.
pub fn month_key(date: chrono::NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

fn sort_ascending(records: &[Refuel]) -> Vec<Refuel> {
    let mut asc = records.to_vec();
    asc.sort_by(|a, b| (a.date, a.id).cmp(&(b.date, b.id)));
    asc
}

/// Accumulation state for one full-to-full window, threaded through the
/// ascending walk. `start` is the index of the opening full-tank record;
/// accumulation begins strictly after it.
struct WindowState {
    start: Option<usize>,
    liters: f64,
    cost: f64,
    cost_known: bool,
}

impl WindowState {
    fn new() -> Self {
        Self {
            start: None,
            liters: 0.0,
            cost: 0.0,
            cost_known: false,
        }
    }

    /// Reset for the next window, with `idx` (the closer) as its start.
    fn restart_at(&mut self, idx: usize) {
        self.start = Some(idx);
        self.liters = 0.0;
        self.cost = 0.0;
        self.cost_known = false;
    }
}

/// Compute per-record derived metrics for the full refuel set.
///
/// Returns exactly one view per input record, descending by (date, id).
/// `km_per_liter` and `liters_per_100km` are set only on records that close
/// a full-tank window; everything before the first full-tank record, and the
/// first full-tank record itself, carries neither.
pub fn compute_derived(records: &[Refuel]) -> Vec<RefuelDerived> {
    let asc = sort_ascending(records);

    // Pass 1: metrics that only need the immediate predecessor.
    let mut out: Vec<RefuelDerived> = Vec::with_capacity(asc.len());
    for (i, cur) in asc.iter().enumerate() {
        let distance = if i > 0 {
            Some((cur.odometer_km - asc[i - 1].odometer_km).max(0.0))
        } else {
            None
        };
        let cost = effective_cost(cur);
        let cost_per_km = match (distance, cost) {
            (Some(d), Some(c)) if d > 0.0 => Some(c / d),
            _ => None,
        };
        out.push(RefuelDerived {
            refuel: cur.clone(),
            distance_since_prev_km: distance,
            km_per_liter: None,
            liters_per_100km: None,
            cost_per_km,
        });
    }

    // Pass 2: full-to-full windows.
    let mut win = WindowState::new();
    for (idx, r) in asc.iter().enumerate() {
        match win.start {
            None => {
                if r.full_tank {
                    win.restart_at(idx);
                }
            }
            Some(start) => {
                win.liters += r.liters.unwrap_or(0.0);
                if r.full_tank {
                    let distance = (r.odometer_km - asc[start].odometer_km).max(0.0);
                    let km_per_liter = if win.liters > 0.0 {
                        Some(distance / win.liters)
                    } else {
                        None
                    };
                    let liters_per_100km = km_per_liter.filter(|k| *k > 0.0).map(|k| 100.0 / k);
                    out[idx].km_per_liter = km_per_liter;
                    out[idx].liters_per_100km = liters_per_100km;
                    win.restart_at(idx);
                }
            }
        }
    }

    out.sort_by(|a, b| (b.refuel.date, b.refuel.id).cmp(&(a.refuel.date, a.refuel.id)));
    out
}

/// One closed full-to-full window, attributed to the month of its closing date.
struct Segment {
    end_date: chrono::NaiveDate,
    distance_km: f64,
    liters: f64,
    cost: Option<f64>,
}

/// Compute the monthly aggregates for the full refuel set.
///
/// One `MonthlyStat` per calendar month containing at least one closed
/// full-to-full window; months without data never appear. A window spanning
/// a month boundary counts entirely toward the month it closes in. Output is
/// ascending by `month_key`.
///
/// Known approximation, preserved for compatibility with stored history: a
/// window's cost sums only the legs whose cost is known; unknown legs
/// contribute zero, so a partially costed window understates spend. The
/// window's cost is absent only when no leg had a known cost.
pub fn compute_monthly_stats(records: &[Refuel]) -> Vec<MonthlyStat> {
    let asc = sort_ascending(records);

    let mut segments: Vec<Segment> = Vec::new();
    let mut win = WindowState::new();
    for (idx, r) in asc.iter().enumerate() {
        match win.start {
            None => {
                if r.full_tank {
                    win.restart_at(idx);
                }
            }
            Some(start) => {
                win.liters += r.liters.unwrap_or(0.0);
                if let Some(cost) = effective_cost(r) {
                    win.cost += cost;
                    win.cost_known = true;
                }
                if r.full_tank {
                    let distance = (r.odometer_km - asc[start].odometer_km).max(0.0);
                    // Zero-sized windows carry no usable signal.
                    if win.liters > 0.0 && distance > 0.0 {
                        segments.push(Segment {
                            end_date: r.date,
                            distance_km: distance,
                            liters: win.liters,
                            cost: win.cost_known.then_some(win.cost),
                        });
                    }
                    win.restart_at(idx);
                }
            }
        }
    }

    let mut by_month: std::collections::BTreeMap<String, Vec<Segment>> =
        std::collections::BTreeMap::new();
    for seg in segments {
        by_month.entry(month_key(seg.end_date)).or_default().push(seg);
    }

    by_month
        .into_iter()
        .map(|(key, segs)| {
            let total_liters: f64 = segs.iter().map(|s| s.liters).sum();
            let total_distance_km: f64 = segs.iter().map(|s| s.distance_km).sum();
            let total_spent: f64 = segs.iter().map(|s| s.cost.unwrap_or(0.0)).sum();
            MonthlyStat {
                month_key: key,
                total_spent,
                total_liters,
                total_distance_km,
                avg_km_per_liter: if total_liters > 0.0 {
                    Some(total_distance_km / total_liters)
                } else {
                    None
                },
            }
        })
        .collect()
}

/// Recompute all monthly aggregates from the stored refuels and replace the
/// persisted set atomically (clear + rewrite in one transaction).
///
/// Call after every refuel insert, update, or delete, and after bulk import.
pub fn recompute_monthly_stats(db: &Database) -> Result<Vec<MonthlyStat>> {
    let refuels = db.list_refuels_ascending()?;
    let stats = compute_monthly_stats(&refuels);
    db.replace_monthly_stats(&stats)?;
    info!(
        "Recomputed monthly stats: {} refuels -> {} months",
        refuels.len(),
        stats.len()
    );
    Ok(stats)
}
