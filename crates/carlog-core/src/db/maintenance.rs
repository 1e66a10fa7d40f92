//! Maintenance task operations

use rusqlite::{params, OptionalExtension};

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{MaintenanceTask, NewMaintenanceTask};

impl Database {
    /// Insert a maintenance task, returning its new ID
    pub fn insert_maintenance_task(&self, task: &NewMaintenanceTask) -> Result<i64> {
        let conn = self.conn()?;
        conn.execute(
            r#"
            INSERT INTO maintenance_tasks (title, details, date, odometer_km, cost, materials, next_due_date, next_due_odometer_km)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
            params![
                task.title,
                task.details,
                task.date.to_string(),
                task.odometer_km,
                task.cost,
                task.materials,
                task.next_due_date.map(|d| d.to_string()),
                task.next_due_odometer_km,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Update an existing maintenance task in place
    pub fn update_maintenance_task(&self, id: i64, task: &NewMaintenanceTask) -> Result<()> {
        let conn = self.conn()?;
        let updated = conn.execute(
            r#"
            UPDATE maintenance_tasks
            SET title = ?, details = ?, date = ?, odometer_km = ?, cost = ?,
                materials = ?, next_due_date = ?, next_due_odometer_km = ?
            WHERE id = ?
            "#,
            params![
                task.title,
                task.details,
                task.date.to_string(),
                task.odometer_km,
                task.cost,
                task.materials,
                task.next_due_date.map(|d| d.to_string()),
                task.next_due_odometer_km,
                id,
            ],
        )?;
        if updated == 0 {
            return Err(Error::NotFound(format!("Maintenance task {} not found", id)));
        }
        Ok(())
    }

    /// Delete a maintenance task by ID
    pub fn delete_maintenance_task(&self, id: i64) -> Result<()> {
        let conn = self.conn()?;
        let deleted = conn.execute("DELETE FROM maintenance_tasks WHERE id = ?", params![id])?;
        if deleted == 0 {
            return Err(Error::NotFound(format!("Maintenance task {} not found", id)));
        }
        Ok(())
    }

    /// Get a single maintenance task by ID
    pub fn get_maintenance_task(&self, id: i64) -> Result<Option<MaintenanceTask>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, title, details, date, odometer_km, cost, materials, next_due_date, next_due_odometer_km, created_at
             FROM maintenance_tasks WHERE id = ?",
        )?;
        let task = stmt
            .query_row(params![id], |row| Self::row_to_maintenance_task(row))
            .optional()?;
        Ok(task)
    }

    /// List maintenance tasks, most recent first
    pub fn list_maintenance_tasks(&self) -> Result<Vec<MaintenanceTask>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, title, details, date, odometer_km, cost, materials, next_due_date, next_due_odometer_km, created_at
            FROM maintenance_tasks
            ORDER BY date DESC, id DESC
            "#,
        )?;
        let tasks = stmt
            .query_map([], |row| Self::row_to_maintenance_task(row))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(tasks)
    }

    /// Count total maintenance tasks
    pub fn count_maintenance_tasks(&self) -> Result<i64> {
        let conn = self.conn()?;
        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM maintenance_tasks", [], |row| row.get(0))?;
        Ok(count)
    }

    fn row_to_maintenance_task(row: &rusqlite::Row) -> rusqlite::Result<MaintenanceTask> {
        let date_str: String = row.get(3)?;
        let next_due_str: Option<String> = row.get(7)?;
        let created_at_str: String = row.get(9)?;
        Ok(MaintenanceTask {
            id: row.get(0)?,
            title: row.get(1)?,
            details: row.get(2)?,
            date: chrono::NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").unwrap_or_default(),
            odometer_km: row.get(4)?,
            cost: row.get(5)?,
            materials: row.get(6)?,
            next_due_date: next_due_str
                .and_then(|s| chrono::NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()),
            next_due_odometer_km: row.get(8)?,
            created_at: parse_datetime(&created_at_str),
        })
    }
}
