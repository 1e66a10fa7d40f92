//! carlog CLI - Personal vehicle tracker
//!
//! Usage:
//!   carlog init                  Initialize database
//!   carlog add --odometer 41200  Record a refuel
//!   carlog list                  Refuels with derived metrics
//!   carlog import --file log.csv Bulk-import a refuel log
//!   carlog stats                 Monthly consumption stats

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db),
        Commands::Add {
            date,
            odometer,
            liters,
            price,
            cost,
            station,
            fuel_type,
            notes,
            partial,
        } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_add(
                &db,
                date.as_deref(),
                odometer,
                liters,
                price,
                cost,
                station,
                fuel_type,
                notes,
                !partial,
            )
        }
        Commands::Edit {
            id,
            date,
            odometer,
            liters,
            price,
            cost,
            station,
            fuel_type,
            notes,
            full_tank,
        } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_edit(
                &db,
                id,
                date.as_deref(),
                odometer,
                liters,
                price,
                cost,
                station,
                fuel_type,
                notes,
                full_tank,
            )
        }
        Commands::Delete { id } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_delete(&db, id)
        }
        Commands::List { limit } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_list(&db, limit)
        }
        Commands::Import { file } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_import(&db, &file)
        }
        Commands::Stats { json } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_stats(&db, json)
        }
        Commands::Maintenance { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                None | Some(MaintenanceAction::List) => commands::cmd_maintenance_list(&db),
                Some(MaintenanceAction::Add {
                    title,
                    date,
                    details,
                    odometer,
                    cost,
                    materials,
                    next_due,
                    next_due_odometer,
                }) => commands::cmd_maintenance_add(
                    &db,
                    &title,
                    date.as_deref(),
                    details,
                    odometer,
                    cost,
                    materials,
                    next_due.as_deref(),
                    next_due_odometer,
                ),
                Some(MaintenanceAction::Delete { id }) => commands::cmd_maintenance_delete(&db, id),
            }
        }
        Commands::Reset { yes } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_reset(&db, yes)
        }
        Commands::Status => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_status(&db)
        }
    }
}
