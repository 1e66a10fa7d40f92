//! Carlog Core Library
//!
//! Shared functionality for the carlog vehicle tracker:
//! - Database access (refuels, monthly stats, maintenance tasks)
//! - Fuel-efficiency engine (per-record derived metrics, monthly aggregates)
//! - CSV import for refuel logs

pub mod db;
pub mod error;
pub mod import;
pub mod models;
pub mod stats;

pub use db::Database;
pub use error::{Error, Result};
pub use models::{
    MaintenanceTask, MonthlyStat, NewMaintenanceTask, NewRefuel, Refuel, RefuelDerived,
};
pub use stats::{compute_derived, compute_monthly_stats, recompute_monthly_stats};
