//! Refuel operations

use rusqlite::{params, OptionalExtension};

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{NewRefuel, Refuel};

impl Database {
    /// Insert a refuel, returning its new ID
    pub fn insert_refuel(&self, refuel: &NewRefuel) -> Result<i64> {
        let conn = self.conn()?;
        conn.execute(
            r#"
            INSERT INTO refuels (date, odometer_km, liters, price_per_liter, total_cost, station, fuel_type, notes, full_tank, seeded)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
            params![
                refuel.date.to_string(),
                refuel.odometer_km,
                refuel.liters,
                refuel.price_per_liter,
                refuel.total_cost,
                refuel.station,
                refuel.fuel_type,
                refuel.notes,
                refuel.full_tank,
                refuel.seeded,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Update an existing refuel in place
    pub fn update_refuel(&self, id: i64, refuel: &NewRefuel) -> Result<()> {
        let conn = self.conn()?;
        let updated = conn.execute(
            r#"
            UPDATE refuels
            SET date = ?, odometer_km = ?, liters = ?, price_per_liter = ?, total_cost = ?,
                station = ?, fuel_type = ?, notes = ?, full_tank = ?, seeded = ?
            WHERE id = ?
            "#,
            params![
                refuel.date.to_string(),
                refuel.odometer_km,
                refuel.liters,
                refuel.price_per_liter,
                refuel.total_cost,
                refuel.station,
                refuel.fuel_type,
                refuel.notes,
                refuel.full_tank,
                refuel.seeded,
                id,
            ],
        )?;
        if updated == 0 {
            return Err(Error::NotFound(format!("Refuel {} not found", id)));
        }
        Ok(())
    }

    /// Delete a refuel by ID
    pub fn delete_refuel(&self, id: i64) -> Result<()> {
        let conn = self.conn()?;
        let deleted = conn.execute("DELETE FROM refuels WHERE id = ?", params![id])?;
        if deleted == 0 {
            return Err(Error::NotFound(format!("Refuel {} not found", id)));
        }
        Ok(())
    }

    /// Get a single refuel by ID
    pub fn get_refuel(&self, id: i64) -> Result<Option<Refuel>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, date, odometer_km, liters, price_per_liter, total_cost, station, fuel_type, notes, full_tank, seeded, created_at
             FROM refuels WHERE id = ?",
        )?;
        let refuel = stmt
            .query_row(params![id], |row| Self::row_to_refuel(row))
            .optional()?;
        Ok(refuel)
    }

    /// List refuels in presentation order (date DESC, id DESC)
    pub fn list_refuels(&self, limit: i64) -> Result<Vec<Refuel>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, date, odometer_km, liters, price_per_liter, total_cost, station, fuel_type, notes, full_tank, seeded, created_at
            FROM refuels
            ORDER BY date DESC, id DESC
            LIMIT ?
            "#,
        )?;
        let refuels = stmt
            .query_map(params![limit], |row| Self::row_to_refuel(row))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(refuels)
    }

    /// List all refuels in processing order (date ASC, id ASC)
    ///
    /// This is the order the stats engine consumes.
    pub fn list_refuels_ascending(&self) -> Result<Vec<Refuel>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, date, odometer_km, liters, price_per_liter, total_cost, station, fuel_type, notes, full_tank, seeded, created_at
            FROM refuels
            ORDER BY date ASC, id ASC
            "#,
        )?;
        let refuels = stmt
            .query_map([], |row| Self::row_to_refuel(row))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(refuels)
    }

    /// Most recent refuel, if any
    pub fn last_refuel(&self) -> Result<Option<Refuel>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, date, odometer_km, liters, price_per_liter, total_cost, station, fuel_type, notes, full_tank, seeded, created_at
            FROM refuels
            ORDER BY date DESC, id DESC
            LIMIT 1
            "#,
        )?;
        let refuel = stmt
            .query_row([], |row| Self::row_to_refuel(row))
            .optional()?;
        Ok(refuel)
    }

    /// Delete all user-entered refuels, keeping seeded/imported rows.
    /// Returns the number of rows removed.
    pub fn delete_user_refuels(&self) -> Result<usize> {
        let conn = self.conn()?;
        let deleted = conn.execute("DELETE FROM refuels WHERE seeded = 0", [])?;
        tracing::info!("Deleted {} user-entered refuels", deleted);
        Ok(deleted)
    }

    /// Count total refuels
    pub fn count_refuels(&self) -> Result<i64> {
        let conn = self.conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM refuels", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Distinct non-blank station names, sorted (for suggestions)
    pub fn list_stations(&self) -> Result<Vec<String>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT DISTINCT station FROM refuels WHERE station IS NOT NULL AND station <> '' ORDER BY station ASC",
        )?;
        let stations = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(stations)
    }

    /// Distinct non-blank fuel types, sorted (for suggestions)
    pub fn list_fuel_types(&self) -> Result<Vec<String>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT DISTINCT fuel_type FROM refuels WHERE fuel_type IS NOT NULL AND fuel_type <> '' ORDER BY fuel_type ASC",
        )?;
        let fuel_types = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(fuel_types)
    }

    /// Helper to convert a row to Refuel
    /// Column order: id, date, odometer_km, liters, price_per_liter, total_cost,
    ///               station, fuel_type, notes, full_tank, seeded, created_at
    pub(crate) fn row_to_refuel(row: &rusqlite::Row) -> rusqlite::Result<Refuel> {
        let date_str: String = row.get(1)?;
        let full_tank_int: i64 = row.get(9)?;
        let seeded_int: i64 = row.get(10)?;
        let created_at_str: String = row.get(11)?;
        Ok(Refuel {
            id: row.get(0)?,
            date: chrono::NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").unwrap_or_default(),
            odometer_km: row.get(2)?,
            liters: row.get(3)?,
            price_per_liter: row.get(4)?,
            total_cost: row.get(5)?,
            station: row.get(6)?,
            fuel_type: row.get(7)?,
            notes: row.get(8)?,
            full_tank: full_tank_int != 0,
            seeded: seeded_int != 0,
            created_at: parse_datetime(&created_at_str),
        })
    }
}
