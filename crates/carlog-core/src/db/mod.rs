//! Database access layer with connection pooling
//!
//! This module is organized by domain:
//! - `refuels` - Refuel CRUD and ordered reads
//! - `monthly` - Precomputed monthly aggregates (atomic replace)
//! - `maintenance` - Maintenance task CRUD

use chrono::{DateTime, Utc};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use tracing::info;

use crate::error::Result;

mod maintenance;
mod monthly;
mod refuels;

pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConn = PooledConnection<SqliteConnectionManager>;

/// Parse a SQLite datetime string into a DateTime<Utc>
pub(crate) fn parse_datetime(s: &str) -> DateTime<Utc> {
    // SQLite stores as "YYYY-MM-DD HH:MM:SS" format
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|dt| dt.and_utc())
        .unwrap_or_else(|_| Utc::now())
}

/// Database wrapper with connection pooling
#[derive(Clone)]
pub struct Database {
    pool: DbPool,
    /// Path to the database file
    db_path: String,
}

impl Database {
    /// Create a new database connection pool and run table setup
    pub fn new(path: &str) -> Result<Self> {
        let manager = SqliteConnectionManager::file(path);
        let pool = Pool::builder().max_size(10).build(manager)?;

        let db = Self {
            pool,
            db_path: path.to_string(),
        };
        db.run_migrations()?;

        Ok(db)
    }

    /// Get the path to the database file
    pub fn path(&self) -> &str {
        &self.db_path
    }

    /// Create a throwaway database (for testing)
    ///
    /// Note: Uses a temporary file rather than `:memory:` because each pooled
    /// connection would otherwise see its own empty in-memory database.
    pub fn in_memory() -> Result<Self> {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);

        let id = COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = format!(
            "{}/carlog_test_{}_{}.db",
            std::env::temp_dir().display(),
            std::process::id(),
            id
        );

        // Remove any existing file
        let _ = std::fs::remove_file(&path);

        Self::new(&path)
    }

    /// Get a connection from the pool
    pub fn conn(&self) -> Result<DbConn> {
        Ok(self.pool.get()?)
    }

    /// Create tables and indexes
    fn run_migrations(&self) -> Result<()> {
        let conn = self.conn()?;

        conn.execute_batch(
            r#"
            -- Enable foreign keys
            PRAGMA foreign_keys = ON;

            -- WAL mode: readers don't block writers
            PRAGMA journal_mode = WAL;

            -- Synchronous NORMAL: safe for most power-loss scenarios
            PRAGMA synchronous = NORMAL;

            -- Fuel refills
            CREATE TABLE IF NOT EXISTS refuels (
                id INTEGER PRIMARY KEY,
                date DATE NOT NULL,
                odometer_km REAL NOT NULL,
                liters REAL,                               -- NULL when no receipt
                price_per_liter REAL,
                total_cost REAL,
                station TEXT,
                fuel_type TEXT,
                notes TEXT,
                full_tank BOOLEAN NOT NULL DEFAULT 1,
                seeded BOOLEAN NOT NULL DEFAULT 0,         -- imported/seed vs user-entered
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );

            CREATE INDEX IF NOT EXISTS idx_refuels_date ON refuels(date);
            CREATE INDEX IF NOT EXISTS idx_refuels_seeded ON refuels(seeded);

            -- Monthly aggregates, fully recomputed on every refuel mutation
            CREATE TABLE IF NOT EXISTS monthly_stats (
                month_key TEXT NOT NULL PRIMARY KEY,       -- "YYYY-MM"
                total_spent REAL NOT NULL,
                total_liters REAL NOT NULL,
                total_distance_km REAL NOT NULL,
                avg_km_per_liter REAL
            );

            -- Maintenance events
            CREATE TABLE IF NOT EXISTS maintenance_tasks (
                id INTEGER PRIMARY KEY,
                title TEXT NOT NULL,
                details TEXT,
                date DATE NOT NULL,
                odometer_km REAL,
                cost REAL,
                materials TEXT,
                next_due_date DATE,
                next_due_odometer_km REAL,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );

            CREATE INDEX IF NOT EXISTS idx_maintenance_date ON maintenance_tasks(date);
            "#,
        )?;

        info!("Database schema initialized");
        Ok(())
    }
}

#[cfg(test)]
mod tests;
