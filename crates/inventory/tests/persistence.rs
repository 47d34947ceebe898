use chrono::{TimeZone, Utc};

use recordkeep_core::MemoryPresenter;
use recordkeep_inventory::{InventoryApp, InventoryItem, InventoryLog, LoadError};

#[test]
fn session_round_trip_reloads_identical_items() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    let now = Utc.with_ymd_and_hms(2026, 10, 17, 8, 0, 0).unwrap();
    let mut out = MemoryPresenter::new();

    let app = InventoryApp::run_session(&path, now, &mut out);

    let names: Vec<String> = app.log().get_all().into_iter().map(|i| i.name).collect();
    assert_eq!(names, vec!["Laptop", "Monitor", "Keyboard", "Mouse", "Chair"]);
    assert!(app.log().get_all().iter().all(|i| i.date_added == now));
    assert!(out.contains("5 items loaded"));
    assert!(out.contains("ID: 4, Name: Mouse, Quantity: 20, Date Added: 2026-10-17 08:00:00"));
}

#[test]
fn file_is_a_json_array_of_objects() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    let now = Utc.with_ymd_and_hms(2026, 10, 17, 8, 0, 0).unwrap();

    let mut app = InventoryApp::new(&path);
    app.seed_sample_data(now, &mut MemoryPresenter::new());
    assert!(app.save_data(&mut MemoryPresenter::new()).is_ok());

    let raw = std::fs::read_to_string(&path).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let array = doc.as_array().unwrap();
    assert_eq!(array.len(), 5);
    assert_eq!(array[0]["name"], "Laptop");
    assert_eq!(array[4]["quantity"], 8);
}

#[test]
fn corrupt_file_is_reported_and_treated_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    std::fs::write(&path, "[{\"id\": \"one\"}]").unwrap();

    let mut app = InventoryApp::new(&path);
    let mut out = MemoryPresenter::new();
    let report = app.load_data(&mut out);

    assert!(matches!(report.error(), Some(LoadError::Malformed { .. })));
    assert!(app.log().items().is_empty());
    assert!(out.contains("failed: malformed inventory file"));
}

#[test]
fn saving_overwrites_previous_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    let now = Utc.with_ymd_and_hms(2026, 10, 17, 8, 0, 0).unwrap();

    let mut first = InventoryApp::new(&path);
    first.seed_sample_data(now, &mut MemoryPresenter::new());
    first.save_data(&mut MemoryPresenter::new());

    let empty = InventoryApp::new(&path);
    empty.save_data(&mut MemoryPresenter::new());

    let mut reloaded: InventoryLog<InventoryItem> = InventoryLog::new(&path);
    assert_eq!(reloaded.load().unwrap(), 0);
}
