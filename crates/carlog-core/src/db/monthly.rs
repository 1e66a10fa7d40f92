//! Monthly aggregate storage
//!
//! The stored set is always replaced wholesale: the engine recomputes every
//! month from scratch after each refuel mutation, and the clear + rewrite
//! happens inside one transaction so readers never observe a half-cleared
//! state.

use rusqlite::{params, OptionalExtension};

use super::Database;
use crate::error::Result;
use crate::models::MonthlyStat;

impl Database {
    /// Atomically replace all stored monthly stats with `stats`
    pub fn replace_monthly_stats(&self, stats: &[MonthlyStat]) -> Result<()> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM monthly_stats", [])?;
        {
            let mut stmt = tx.prepare(
                r#"
                INSERT INTO monthly_stats (month_key, total_spent, total_liters, total_distance_km, avg_km_per_liter)
                VALUES (?, ?, ?, ?, ?)
                "#,
            )?;
            for stat in stats {
                stmt.execute(params![
                    stat.month_key,
                    stat.total_spent,
                    stat.total_liters,
                    stat.total_distance_km,
                    stat.avg_km_per_liter,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    /// List monthly stats, most recent month first
    pub fn list_monthly_stats(&self) -> Result<Vec<MonthlyStat>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT month_key, total_spent, total_liters, total_distance_km, avg_km_per_liter
            FROM monthly_stats
            ORDER BY month_key DESC
            "#,
        )?;
        let stats = stmt
            .query_map([], |row| Self::row_to_monthly_stat(row))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(stats)
    }

    /// Get the aggregate for one month ("YYYY-MM")
    pub fn get_monthly_stat(&self, month_key: &str) -> Result<Option<MonthlyStat>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT month_key, total_spent, total_liters, total_distance_km, avg_km_per_liter
            FROM monthly_stats
            WHERE month_key = ?
            "#,
        )?;
        let stat = stmt
            .query_row(params![month_key], |row| Self::row_to_monthly_stat(row))
            .optional()?;
        Ok(stat)
    }

    fn row_to_monthly_stat(row: &rusqlite::Row) -> rusqlite::Result<MonthlyStat> {
        Ok(MonthlyStat {
            month_key: row.get(0)?,
            total_spent: row.get(1)?,
            total_liters: row.get(2)?,
            total_distance_km: row.get(3)?,
            avg_km_per_liter: row.get(4)?,
        })
    }
}
