//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// carlog - Personal vehicle tracker
#[derive(Parser)]
#[command(name = "carlog")]
#[command(about = "Track refuels and maintenance, derive fuel consumption stats", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "carlog.db", global = true)]
    pub db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Record a refuel
    Add {
        /// Refuel date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Odometer reading in km
        #[arg(short, long)]
        odometer: f64,

        /// Liters added (omit when unknown, e.g. no receipt)
        #[arg(short, long)]
        liters: Option<f64>,

        /// Price per liter
        #[arg(short, long)]
        price: Option<f64>,

        /// Total cost (derived from liters x price when omitted)
        #[arg(short, long)]
        cost: Option<f64>,

        /// Station name
        #[arg(short, long)]
        station: Option<String>,

        /// Fuel type
        #[arg(short, long)]
        fuel_type: Option<String>,

        /// Free-form notes
        #[arg(short, long)]
        notes: Option<String>,

        /// Mark as a partial fill (full tank is the default)
        #[arg(long)]
        partial: bool,
    },

    /// Edit an existing refuel
    Edit {
        /// Refuel ID
        id: i64,

        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        #[arg(short, long)]
        odometer: Option<f64>,

        #[arg(short, long)]
        liters: Option<f64>,

        #[arg(short, long)]
        price: Option<f64>,

        #[arg(short, long)]
        cost: Option<f64>,

        #[arg(short, long)]
        station: Option<String>,

        #[arg(short, long)]
        fuel_type: Option<String>,

        #[arg(short, long)]
        notes: Option<String>,

        /// Change the full-tank flag (true/false)
        #[arg(long)]
        full_tank: Option<bool>,
    },

    /// Delete a refuel
    Delete {
        /// Refuel ID
        id: i64,
    },

    /// List refuels with derived metrics, most recent first
    List {
        /// Maximum number of rows to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Import refuels from a CSV log
    Import {
        /// CSV file to import
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Show monthly consumption stats
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage maintenance tasks
    Maintenance {
        #[command(subcommand)]
        action: Option<MaintenanceAction>,
    },

    /// Delete all user-entered refuels (imported/seed rows are kept)
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show database status
    Status,
}

#[derive(Subcommand)]
pub enum MaintenanceAction {
    /// List maintenance tasks, most recent first
    List,

    /// Add a maintenance task
    Add {
        /// Short title ("Oil change")
        title: String,

        /// Task date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        details: Option<String>,

        #[arg(short, long)]
        odometer: Option<f64>,

        #[arg(short, long)]
        cost: Option<f64>,

        #[arg(short, long)]
        materials: Option<String>,

        /// When the task is next due (YYYY-MM-DD)
        #[arg(long)]
        next_due: Option<String>,

        /// Odometer reading at which the task is next due
        #[arg(long)]
        next_due_odometer: Option<f64>,
    },

    /// Delete a maintenance task
    Delete {
        /// Task ID
        id: i64,
    },
}
