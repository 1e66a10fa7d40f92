//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Shared utilities (open_db, date parsing) and init/status/reset
//! - `refuels` - Refuel commands (add, edit, delete, list)
//! - `import` - CSV import command
//! - `stats` - Monthly stats command
//! - `maintenance` - Maintenance task commands

pub mod core;
pub mod import;
pub mod maintenance;
pub mod refuels;
pub mod stats;

// Re-export command functions for main.rs
pub use core::*;
pub use import::*;
pub use maintenance::*;
pub use refuels::*;
pub use stats::*;

/// Format an optional number with fixed precision, "-" when absent
pub fn fmt_opt(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", precision, v),
        None => "-".to_string(),
    }
}

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        format!("{}...", &s[..max.saturating_sub(3)])
    }
}
