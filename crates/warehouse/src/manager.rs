//! Warehouse manager: seeding, listing and best-effort stock operations.

use chrono::{Days, NaiveDate};

use recordkeep_core::{DomainError, DomainResult, Entity, Presenter, Report, Repository};

use crate::item::{ElectronicItem, GroceryItem, InventoryItem, ItemId};

/// Stock category; each category has its own repository and id space.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Electronics,
    Groceries,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Groceries => "groceries",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

fn target(category: Category, id: ItemId) -> String {
    format!("{category} #{id}")
}

/// Coordinates the electronics and groceries repositories.
///
/// Mutating operations are fire-and-report: repository errors are turned into
/// a failed [`Report`] and never returned as `Err`. Lookups (`get_*`) do
/// propagate `NotFound`.
#[derive(Debug, Default)]
pub struct WarehouseManager {
    electronics: Repository<ElectronicItem>,
    groceries: Repository<GroceryItem>,
}

impl WarehouseManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn electronics(&self) -> &Repository<ElectronicItem> {
        &self.electronics
    }

    pub fn groceries(&self) -> &Repository<GroceryItem> {
        &self.groceries
    }

    pub fn get_electronic(&self, id: ItemId) -> DomainResult<&ElectronicItem> {
        self.electronics.get_by_id(id)
    }

    pub fn get_grocery(&self, id: ItemId) -> DomainResult<&GroceryItem> {
        self.groceries.get_by_id(id)
    }

    /// Populate both categories with the fixed starter stock.
    ///
    /// Each failed insert is reported and seeding carries on with the next
    /// record. Only failures are returned.
    pub fn seed_data(&mut self, today: NaiveDate, out: &mut dyn Presenter) -> Vec<Report> {
        let electronics = [
            ElectronicItem::new(ItemId::new(1), "Laptop", 5, "Dell", 24),
            ElectronicItem::new(ItemId::new(2), "Smartphone", 10, "Samsung", 12),
        ];
        let groceries = [
            GroceryItem::new(ItemId::new(1), "Milk", 20, today + Days::new(7)),
            GroceryItem::new(ItemId::new(2), "Bread", 15, today + Days::new(2)),
        ];

        let mut failures = Vec::new();
        for item in electronics {
            let id = item.id();
            if let Err(err) = self.electronics.add(item) {
                failures.push(Report::failed("seed", target(Category::Electronics, id), err).publish(out));
            }
        }
        for item in groceries {
            let id = item.id();
            if let Err(err) = self.groceries.add(item) {
                failures.push(Report::failed("seed", target(Category::Groceries, id), err).publish(out));
            }
        }

        tracing::debug!(
            electronics = self.electronics.len(),
            groceries = self.groceries.len(),
            "warehouse seeded"
        );
        failures
    }

    pub fn add_electronic(&mut self, item: ElectronicItem, out: &mut dyn Presenter) -> Report {
        add_to(&mut self.electronics, Category::Electronics, item).publish(out)
    }

    pub fn add_grocery(&mut self, item: GroceryItem, out: &mut dyn Presenter) -> Report {
        add_to(&mut self.groceries, Category::Groceries, item).publish(out)
    }

    /// Emit every item of a category in insertion order. Read-only.
    pub fn print_all(&self, category: Category, out: &mut dyn Presenter) {
        match category {
            Category::Electronics => print_items(&self.electronics, out),
            Category::Groceries => print_items(&self.groceries, out),
        }
    }

    /// Add `delta` to the current quantity of an item.
    pub fn increase_stock(
        &mut self,
        category: Category,
        id: ItemId,
        delta: i64,
        out: &mut dyn Presenter,
    ) -> Report {
        let result = match category {
            Category::Electronics => increase_in(&mut self.electronics, id, delta),
            Category::Groceries => increase_in(&mut self.groceries, id, delta),
        };
        let report = match result {
            Ok(quantity) => Report::completed(
                "increase_stock",
                target(category, id),
                format!("stock increased, new quantity {quantity}"),
            ),
            Err(err) => Report::failed("increase_stock", target(category, id), err),
        };
        report.publish(out)
    }

    /// Overwrite the quantity of an item.
    pub fn set_quantity(
        &mut self,
        category: Category,
        id: ItemId,
        quantity: i64,
        out: &mut dyn Presenter,
    ) -> Report {
        let result = match category {
            Category::Electronics => self.electronics.update_quantity(id, quantity),
            Category::Groceries => self.groceries.update_quantity(id, quantity),
        };
        let report = match result {
            Ok(()) => Report::completed(
                "set_quantity",
                target(category, id),
                format!("quantity set to {quantity}"),
            ),
            Err(err) => Report::failed("set_quantity", target(category, id), err),
        };
        report.publish(out)
    }

    pub fn remove_by_id(&mut self, category: Category, id: ItemId, out: &mut dyn Presenter) -> Report {
        let result = match category {
            Category::Electronics => self.electronics.remove(id).map(|item| item.name().to_string()),
            Category::Groceries => self.groceries.remove(id).map(|item| item.name().to_string()),
        };
        let report = match result {
            Ok(name) => Report::completed("remove", target(category, id), format!("{name} removed")),
            Err(err) => Report::failed("remove", target(category, id), err),
        };
        report.publish(out)
    }

    /// The scripted walkthrough: list stock, then exercise each failure path.
    pub fn run_demo(&mut self, today: NaiveDate, out: &mut dyn Presenter) -> Vec<Report> {
        let mut reports = self.seed_data(today, out);

        out.section("Grocery Items:");
        self.print_all(Category::Groceries, out);
        out.section("Electronic Items:");
        self.print_all(Category::Electronics, out);

        out.section("Try adding duplicate item:");
        reports.push(self.add_electronic(
            ElectronicItem::new(ItemId::new(1), "Tablet", 3, "Lenovo", 18),
            out,
        ));

        out.section("Try removing non-existent item:");
        reports.push(self.remove_by_id(Category::Groceries, ItemId::new(999), out));

        out.section("Try updating with invalid quantity:");
        reports.push(self.set_quantity(Category::Electronics, ItemId::new(2), -5, out));

        reports
    }
}

fn add_to<T: InventoryItem>(repo: &mut Repository<T>, category: Category, item: T) -> Report {
    let id = item.id();
    let name = item.name().to_string();
    match repo.add(item) {
        Ok(()) => Report::completed("add", target(category, id), format!("{name} added")),
        Err(err) => Report::failed("add", target(category, id), err),
    }
}

fn increase_in<T: InventoryItem>(repo: &mut Repository<T>, id: ItemId, delta: i64) -> DomainResult<i64> {
    let current = repo.get_by_id(id)?.quantity();
    let next = current
        .checked_add(delta)
        .ok_or_else(|| DomainError::invalid_value("quantity overflow"))?;
    repo.update_quantity(id, next)?;
    Ok(next)
}

fn print_items<T: InventoryItem>(repo: &Repository<T>, out: &mut dyn Presenter) {
    for item in repo.iter() {
        out.line(&format!("- {item}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recordkeep_core::{MemoryPresenter, Stocked};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    fn seeded() -> (WarehouseManager, MemoryPresenter) {
        let mut manager = WarehouseManager::new();
        let mut out = MemoryPresenter::new();
        let failures = manager.seed_data(today(), &mut out);
        assert!(failures.is_empty());
        (manager, out)
    }

    #[test]
    fn seed_populates_both_categories_in_order() {
        let (manager, _) = seeded();
        let names: Vec<String> = manager
            .electronics()
            .iter()
            .map(|i| i.name().to_string())
            .collect();
        assert_eq!(names, vec!["Laptop", "Smartphone"]);
        assert_eq!(manager.groceries().len(), 2);
        assert_eq!(
            manager.get_grocery(ItemId::new(1)).unwrap().expiry_date(),
            NaiveDate::from_ymd_opt(2026, 10, 24).unwrap()
        );
    }

    #[test]
    fn reseeding_reports_duplicates_without_panicking() {
        let (mut manager, mut out) = seeded();
        let failures = manager.seed_data(today(), &mut out);

        assert_eq!(failures.len(), 4);
        assert!(failures
            .iter()
            .all(|r| matches!(r.error(), Some(DomainError::DuplicateKey { .. }))));
        assert_eq!(manager.electronics().len(), 2);
    }

    #[test]
    fn print_all_lists_items_without_changing_state() {
        let (manager, _) = seeded();
        let mut out = MemoryPresenter::new();
        manager.print_all(Category::Electronics, &mut out);

        assert_eq!(
            out.lines(),
            &[
                "- Laptop (ID: 1, Brand: Dell, Qty: 5, Warranty: 24 months)",
                "- Smartphone (ID: 2, Brand: Samsung, Qty: 10, Warranty: 12 months)",
            ]
        );
        assert_eq!(manager.electronics().len(), 2);
    }

    #[test]
    fn increase_stock_adds_delta() {
        let (mut manager, mut out) = seeded();
        let report = manager.increase_stock(Category::Electronics, ItemId::new(1), 3, &mut out);

        assert!(report.is_ok());
        assert_eq!(manager.get_electronic(ItemId::new(1)).unwrap().quantity(), 8);
        assert!(out.contains("new quantity 8"));
    }

    #[test]
    fn increase_stock_on_missing_item_is_reported() {
        let (mut manager, mut out) = seeded();
        let report = manager.increase_stock(Category::Groceries, ItemId::new(42), 1, &mut out);

        assert!(report.error().unwrap().is_not_found());
        assert!(out.contains("groceries #42: failed"));
    }

    #[test]
    fn increase_stock_below_zero_is_invalid_and_unchanged() {
        let (mut manager, mut out) = seeded();
        let report = manager.increase_stock(Category::Groceries, ItemId::new(2), -100, &mut out);

        assert!(matches!(report.error(), Some(DomainError::InvalidValue(_))));
        assert_eq!(manager.get_grocery(ItemId::new(2)).unwrap().quantity(), 15);
    }

    #[test]
    fn remove_by_id_removes_only_from_its_category() {
        let (mut manager, mut out) = seeded();
        let report = manager.remove_by_id(Category::Groceries, ItemId::new(1), &mut out);

        assert!(report.is_ok());
        assert!(manager.get_grocery(ItemId::new(1)).is_err());
        assert!(manager.get_electronic(ItemId::new(1)).is_ok());
    }

    #[test]
    fn demo_exercises_each_failure_path() {
        let mut manager = WarehouseManager::new();
        let mut out = MemoryPresenter::new();
        let reports = manager.run_demo(today(), &mut out);

        assert_eq!(reports.len(), 3);
        assert!(matches!(reports[0].error(), Some(DomainError::DuplicateKey { .. })));
        assert!(reports[1].error().unwrap().is_not_found());
        assert!(matches!(reports[2].error(), Some(DomainError::InvalidValue(_))));

        assert_eq!(manager.get_electronic(ItemId::new(1)).unwrap().name(), "Laptop");
        assert_eq!(manager.get_electronic(ItemId::new(2)).unwrap().quantity(), 10);
        assert!(out.contains("- Milk (ID: 1, Qty: 20, Exp: 2026-10-24)"));
    }
}
