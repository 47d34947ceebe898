//! Warehouse domain module.
//!
//! Two stock categories (electronics and groceries), each held in its own
//! repository, coordinated by [`WarehouseManager`].

pub mod item;
pub mod manager;

pub use item::{ElectronicItem, GroceryItem, InventoryItem, ItemId};
pub use manager::{Category, WarehouseManager};
