//! Inventory application: seed, persist, reload and list.

use std::path::PathBuf;

use chrono::{DateTime, Utc};

use recordkeep_core::{Presenter, Report};

use crate::error::{LoadError, SaveError};
use crate::item::{InventoryItem, InventoryItemId};
use crate::log::InventoryLog;

/// Wraps an [`InventoryLog`] of [`InventoryItem`]s.
///
/// Save and load are best-effort: failures are reported through the
/// presenter and logs, never returned as `Err`.
#[derive(Debug)]
pub struct InventoryApp {
    log: InventoryLog<InventoryItem>,
}

impl InventoryApp {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            log: InventoryLog::new(path),
        }
    }

    pub fn log(&self) -> &InventoryLog<InventoryItem> {
        &self.log
    }

    /// Add the five sample items, all stamped with `now`.
    pub fn seed_sample_data(&mut self, now: DateTime<Utc>, out: &mut dyn Presenter) -> Vec<Report> {
        let samples = [
            (1, "Laptop", 10),
            (2, "Monitor", 5),
            (3, "Keyboard", 15),
            (4, "Mouse", 20),
            (5, "Chair", 8),
        ];

        let mut failures = Vec::new();
        for (id, name, quantity) in samples {
            let item = InventoryItem::new(InventoryItemId::new(id), name, quantity, now);
            if let Err(err) = self.log.add(item) {
                failures.push(Report::failed("seed", format!("inventory item #{id}"), err).publish(out));
            }
        }
        failures
    }

    pub fn save_data(&self, out: &mut dyn Presenter) -> Report<SaveError> {
        let target = self.log.path().display().to_string();
        let report = match self.log.save() {
            Ok(()) => Report::completed("save", target, "data saved successfully"),
            Err(err) => Report::failed("save", target, err),
        };
        report.publish(out)
    }

    /// Reload from disk. On failure the in-memory data is treated as empty.
    pub fn load_data(&mut self, out: &mut dyn Presenter) -> Report<LoadError> {
        let target = self.log.path().display().to_string();
        let report = match self.log.load() {
            Ok(0) => Report::completed("load", target, "no data to load"),
            Ok(n) => Report::completed("load", target, format!("{n} items loaded")),
            Err(err) => Report::failed("load", target, err),
        };
        report.publish(out)
    }

    pub fn print_all_items(&self, out: &mut dyn Presenter) {
        out.section("--- Inventory Items ---");
        for item in self.log.items().iter() {
            out.line(&item.to_string());
        }
    }

    /// Drop all in-memory items while keeping the file binding.
    pub fn clear_in_memory(&mut self) {
        self.log = InventoryLog::new(self.log.path().to_path_buf());
    }

    /// Seed and save, then simulate a new session that reloads and lists.
    pub fn run_session(path: impl Into<PathBuf>, now: DateTime<Utc>, out: &mut dyn Presenter) -> Self {
        let path = path.into();

        let mut first = Self::new(path.clone());
        first.seed_sample_data(now, out);
        first.save_data(out);

        out.section("Simulating new session...");
        let mut second = Self::new(path);
        second.load_data(out);
        second.print_all_items(out);
        second
    }
}
