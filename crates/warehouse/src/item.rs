use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use recordkeep_core::{Entity, Stocked, numeric_id};

numeric_id! {
    /// Warehouse item identifier. Scoped per category repository.
    pub struct ItemId;
}

/// Capability shared by every stockable warehouse item.
pub trait InventoryItem: Stocked<Id = ItemId> + Clone + core::fmt::Display {
    fn name(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectronicItem {
    id: ItemId,
    name: String,
    quantity: i64,
    brand: String,
    warranty_months: u32,
}

impl ElectronicItem {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        quantity: i64,
        brand: impl Into<String>,
        warranty_months: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            brand: brand.into(),
            warranty_months,
        }
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn warranty_months(&self) -> u32 {
        self.warranty_months
    }
}

impl Entity for ElectronicItem {
    type Id = ItemId;
    const KIND: &'static str = "electronic item";

    fn id(&self) -> ItemId {
        self.id
    }
}

impl Stocked for ElectronicItem {
    fn quantity(&self) -> i64 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }
}

impl InventoryItem for ElectronicItem {
    fn name(&self) -> &str {
        &self.name
    }
}

impl core::fmt::Display for ElectronicItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} (ID: {}, Brand: {}, Qty: {}, Warranty: {} months)",
            self.name, self.id, self.brand, self.quantity, self.warranty_months
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    id: ItemId,
    name: String,
    quantity: i64,
    expiry_date: NaiveDate,
}

impl GroceryItem {
    pub fn new(id: ItemId, name: impl Into<String>, quantity: i64, expiry_date: NaiveDate) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            expiry_date,
        }
    }

    pub fn expiry_date(&self) -> NaiveDate {
        self.expiry_date
    }

    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiry_date < today
    }
}

impl Entity for GroceryItem {
    type Id = ItemId;
    const KIND: &'static str = "grocery item";

    fn id(&self) -> ItemId {
        self.id
    }
}

impl Stocked for GroceryItem {
    fn quantity(&self) -> i64 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }
}

impl InventoryItem for GroceryItem {
    fn name(&self) -> &str {
        &self.name
    }
}

impl core::fmt::Display for GroceryItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} (ID: {}, Qty: {}, Exp: {})",
            self.name,
            self.id,
            self.quantity,
            self.expiry_date.format("%Y-%m-%d")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn electronic_item_display_lists_brand_and_warranty() {
        let laptop = ElectronicItem::new(ItemId::new(1), "Laptop", 5, "Dell", 24);
        assert_eq!(
            laptop.to_string(),
            "Laptop (ID: 1, Brand: Dell, Qty: 5, Warranty: 24 months)"
        );
    }

    #[test]
    fn grocery_item_display_formats_expiry_as_iso_date() {
        let milk = GroceryItem::new(
            ItemId::new(1),
            "Milk",
            20,
            NaiveDate::from_ymd_opt(2026, 3, 9).unwrap(),
        );
        assert_eq!(milk.to_string(), "Milk (ID: 1, Qty: 20, Exp: 2026-03-09)");
    }

    #[test]
    fn grocery_expiry_is_strictly_after_date() {
        let day = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        let bread = GroceryItem::new(ItemId::new(2), "Bread", 15, day);
        assert!(!bread.is_expired(day));
        assert!(bread.is_expired(day.succ_opt().unwrap()));
    }
}
