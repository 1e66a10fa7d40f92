//! Database tests

use super::*;
use crate::models::{MonthlyStat, NewMaintenanceTask, NewRefuel};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_refuel(d: NaiveDate, odometer_km: f64, full_tank: bool) -> NewRefuel {
    NewRefuel {
        date: d,
        odometer_km,
        liters: None,
        price_per_liter: None,
        total_cost: None,
        station: None,
        fuel_type: None,
        notes: None,
        full_tank,
        seeded: false,
    }
}

#[test]
fn test_in_memory_db() {
    let db = Database::in_memory().unwrap();
    assert_eq!(db.count_refuels().unwrap(), 0);
    assert!(db.list_monthly_stats().unwrap().is_empty());
    assert_eq!(db.count_maintenance_tasks().unwrap(), 0);
}

#[test]
fn test_refuel_crud() {
    let db = Database::in_memory().unwrap();

    let mut refuel = new_refuel(date(2025, 3, 1), 41200.0, true);
    refuel.liters = Some(38.5);
    refuel.station = Some("Shell Centro".to_string());
    let id = db.insert_refuel(&refuel).unwrap();
    assert!(id > 0);

    let stored = db.get_refuel(id).unwrap().unwrap();
    assert_eq!(stored.odometer_km, 41200.0);
    assert_eq!(stored.liters, Some(38.5));
    assert_eq!(stored.station.as_deref(), Some("Shell Centro"));
    assert!(stored.full_tank);
    assert!(!stored.seeded);

    let mut updated = refuel.clone();
    updated.odometer_km = 41210.0;
    updated.full_tank = false;
    db.update_refuel(id, &updated).unwrap();
    let stored = db.get_refuel(id).unwrap().unwrap();
    assert_eq!(stored.odometer_km, 41210.0);
    assert!(!stored.full_tank);

    db.delete_refuel(id).unwrap();
    assert!(db.get_refuel(id).unwrap().is_none());
}

#[test]
fn test_update_missing_refuel_is_not_found() {
    let db = Database::in_memory().unwrap();
    let refuel = new_refuel(date(2025, 3, 1), 41200.0, true);
    assert!(matches!(
        db.update_refuel(999, &refuel),
        Err(crate::error::Error::NotFound(_))
    ));
    assert!(matches!(
        db.delete_refuel(999),
        Err(crate::error::Error::NotFound(_))
    ));
}

#[test]
fn test_list_orderings() {
    let db = Database::in_memory().unwrap();
    // Insert out of chronological order; two rows share a date.
    db.insert_refuel(&new_refuel(date(2025, 3, 10), 41500.0, false))
        .unwrap();
    db.insert_refuel(&new_refuel(date(2025, 3, 1), 41200.0, true))
        .unwrap();
    db.insert_refuel(&new_refuel(date(2025, 3, 10), 41600.0, true))
        .unwrap();

    let desc = db.list_refuels(10).unwrap();
    let desc_dates: Vec<_> = desc.iter().map(|r| (r.date, r.id)).collect();
    let mut expected = desc_dates.clone();
    expected.sort_by(|a, b| b.cmp(a));
    assert_eq!(desc_dates, expected);

    let asc = db.list_refuels_ascending().unwrap();
    assert_eq!(asc.len(), 3);
    assert_eq!(asc[0].date, date(2025, 3, 1));
    // Same-date tie broken by id ascending.
    assert!(asc[1].id < asc[2].id);
    assert_eq!(asc[1].date, asc[2].date);
}

#[test]
fn test_list_refuels_respects_limit() {
    let db = Database::in_memory().unwrap();
    for d in 1..=5 {
        db.insert_refuel(&new_refuel(date(2025, 3, d), 41000.0 + d as f64, false))
            .unwrap();
    }
    assert_eq!(db.list_refuels(3).unwrap().len(), 3);
}

#[test]
fn test_last_refuel() {
    let db = Database::in_memory().unwrap();
    assert!(db.last_refuel().unwrap().is_none());

    let mut a = new_refuel(date(2025, 3, 1), 41200.0, true);
    a.station = Some("Pemex Norte".to_string());
    db.insert_refuel(&a).unwrap();
    let mut b = new_refuel(date(2025, 3, 9), 41550.0, true);
    b.station = Some("Shell Centro".to_string());
    db.insert_refuel(&b).unwrap();

    let last = db.last_refuel().unwrap().unwrap();
    assert_eq!(last.station.as_deref(), Some("Shell Centro"));
}

#[test]
fn test_delete_user_refuels_keeps_seeded() {
    let db = Database::in_memory().unwrap();
    let mut seeded = new_refuel(date(2025, 3, 1), 41200.0, true);
    seeded.seeded = true;
    db.insert_refuel(&seeded).unwrap();
    db.insert_refuel(&new_refuel(date(2025, 3, 9), 41550.0, true))
        .unwrap();
    db.insert_refuel(&new_refuel(date(2025, 3, 15), 41900.0, true))
        .unwrap();

    let deleted = db.delete_user_refuels().unwrap();
    assert_eq!(deleted, 2);

    let remaining = db.list_refuels_ascending().unwrap();
    assert_eq!(remaining.len(), 1);
    assert!(remaining[0].seeded);
}

#[test]
fn test_station_and_fuel_type_suggestions() {
    let db = Database::in_memory().unwrap();
    let mut a = new_refuel(date(2025, 3, 1), 41200.0, true);
    a.station = Some("Shell Centro".to_string());
    a.fuel_type = Some("Magna".to_string());
    db.insert_refuel(&a).unwrap();
    let mut b = new_refuel(date(2025, 3, 9), 41550.0, true);
    b.station = Some("Pemex Norte".to_string());
    b.fuel_type = Some("Magna".to_string());
    db.insert_refuel(&b).unwrap();
    // Blank station should not appear.
    let mut c = new_refuel(date(2025, 3, 15), 41900.0, true);
    c.station = Some("".to_string());
    db.insert_refuel(&c).unwrap();

    assert_eq!(
        db.list_stations().unwrap(),
        vec!["Pemex Norte".to_string(), "Shell Centro".to_string()]
    );
    assert_eq!(db.list_fuel_types().unwrap(), vec!["Magna".to_string()]);
}

#[test]
fn test_replace_monthly_stats_clears_then_writes() {
    let db = Database::in_memory().unwrap();

    let first = vec![MonthlyStat {
        month_key: "2025-02".to_string(),
        total_spent: 500.0,
        total_liters: 20.0,
        total_distance_km: 240.0,
        avg_km_per_liter: Some(12.0),
    }];
    db.replace_monthly_stats(&first).unwrap();
    assert_eq!(db.list_monthly_stats().unwrap(), first);

    // Replacing with a different set leaves no trace of the old months.
    let second = vec![
        MonthlyStat {
            month_key: "2025-03".to_string(),
            total_spent: 300.0,
            total_liters: 12.0,
            total_distance_km: 120.0,
            avg_km_per_liter: Some(10.0),
        },
        MonthlyStat {
            month_key: "2025-04".to_string(),
            total_spent: 0.0,
            total_liters: 10.0,
            total_distance_km: 100.0,
            avg_km_per_liter: Some(10.0),
        },
    ];
    db.replace_monthly_stats(&second).unwrap();

    let listed = db.list_monthly_stats().unwrap();
    // Most recent month first.
    assert_eq!(listed[0].month_key, "2025-04");
    assert_eq!(listed[1].month_key, "2025-03");
    assert!(db.get_monthly_stat("2025-02").unwrap().is_none());

    // Replacing with empty clears everything.
    db.replace_monthly_stats(&[]).unwrap();
    assert!(db.list_monthly_stats().unwrap().is_empty());
}

#[test]
fn test_get_monthly_stat() {
    let db = Database::in_memory().unwrap();
    let stats = vec![MonthlyStat {
        month_key: "2025-03".to_string(),
        total_spent: 958.65,
        total_liters: 38.5,
        total_distance_km: 420.0,
        avg_km_per_liter: Some(420.0 / 38.5),
    }];
    db.replace_monthly_stats(&stats).unwrap();

    let stat = db.get_monthly_stat("2025-03").unwrap().unwrap();
    assert_eq!(stat.total_liters, 38.5);
    assert!(db.get_monthly_stat("2024-12").unwrap().is_none());
}

#[test]
fn test_maintenance_task_crud() {
    let db = Database::in_memory().unwrap();

    let task = NewMaintenanceTask {
        title: "Oil change".to_string(),
        details: Some("5W-30 synthetic".to_string()),
        date: date(2025, 3, 12),
        odometer_km: Some(41500.0),
        cost: Some(1200.0),
        materials: Some("filter, 4L oil".to_string()),
        next_due_date: Some(date(2025, 9, 12)),
        next_due_odometer_km: Some(51500.0),
    };
    let id = db.insert_maintenance_task(&task).unwrap();
    assert!(id > 0);

    let stored = db.get_maintenance_task(id).unwrap().unwrap();
    assert_eq!(stored.title, "Oil change");
    assert_eq!(stored.next_due_date, Some(date(2025, 9, 12)));

    let mut updated = task.clone();
    updated.cost = Some(1350.0);
    db.update_maintenance_task(id, &updated).unwrap();
    assert_eq!(
        db.get_maintenance_task(id).unwrap().unwrap().cost,
        Some(1350.0)
    );

    let tasks = db.list_maintenance_tasks().unwrap();
    assert_eq!(tasks.len(), 1);

    db.delete_maintenance_task(id).unwrap();
    assert!(db.get_maintenance_task(id).unwrap().is_none());
    assert!(matches!(
        db.delete_maintenance_task(id),
        Err(crate::error::Error::NotFound(_))
    ));
}
