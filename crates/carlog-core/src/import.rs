//! CSV import for refuel logs
//!
//! Expected layout, one header row then 9 columns per record:
//!
//! ```text
//! date,odometer_km,liters,price_per_liter,total_cost,station,fuel_type,notes,full_tank
//! 2025-03-01,41200,38.5,24.90,958.65,Shell Centro,Magna,,true
//! ```
//!
//! Import is best-effort bulk load: rows with fewer than 9 fields are skipped
//! silently, as are rows whose date or numeric fields fail to parse. Imported
//! rows are marked `seeded` so `carlog reset` leaves them alone.

use chrono::NaiveDate;
use csv::ReaderBuilder;
use std::io::Read;
use tracing::debug;

use crate::error::Result;
use crate::models::NewRefuel;

/// A blank field means "unknown"; anything else must be a number.
/// Returns Err(()) so the caller can skip the whole row.
fn parse_optional_f64(field: &str) -> std::result::Result<Option<f64>, ()> {
    let field = field.trim();
    if field.is_empty() {
        return Ok(None);
    }
    field.parse::<f64>().map(Some).map_err(|_| ())
}

fn non_blank(field: &str) -> Option<String> {
    let field = field.trim();
    if field.is_empty() {
        None
    } else {
        Some(field.to_string())
    }
}

/// Parse a refuel log CSV into insertable records, skipping malformed rows.
pub fn parse_refuel_csv<R: Read>(reader: R) -> Result<Vec<NewRefuel>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut refuels = Vec::new();
    let mut skipped = 0usize;

    for result in rdr.records() {
        let record = result?;

        if record.len() < 9 {
            skipped += 1;
            continue;
        }

        let parsed = (|| -> std::result::Result<NewRefuel, ()> {
            let date = NaiveDate::parse_from_str(record.get(0).unwrap_or("").trim(), "%Y-%m-%d")
                .map_err(|_| ())?;
            let odometer_km = record
                .get(1)
                .unwrap_or("")
                .trim()
                .parse::<f64>()
                .map_err(|_| ())?;
            Ok(NewRefuel {
                date,
                odometer_km,
                liters: parse_optional_f64(record.get(2).unwrap_or(""))?,
                price_per_liter: parse_optional_f64(record.get(3).unwrap_or(""))?,
                total_cost: parse_optional_f64(record.get(4).unwrap_or(""))?,
                station: non_blank(record.get(5).unwrap_or("")),
                fuel_type: non_blank(record.get(6).unwrap_or("")),
                notes: non_blank(record.get(7).unwrap_or("")),
                full_tank: record
                    .get(8)
                    .unwrap_or("")
                    .trim()
                    .eq_ignore_ascii_case("true"),
                seeded: true,
            })
        })();

        match parsed {
            Ok(refuel) => refuels.push(refuel),
            Err(()) => skipped += 1,
        }
    }

    debug!(
        "Parsed {} refuel rows ({} skipped)",
        refuels.len(),
        skipped
    );
    Ok(refuels)
}
