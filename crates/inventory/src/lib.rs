//! Inventory log persisted as a JSON document.
//!
//! Items are kept in a [`Repository`](recordkeep_core::Repository) and written
//! to / read from a single file as an array of objects in insertion order.

pub mod app;
pub mod error;
pub mod item;
pub mod log;

pub use app::InventoryApp;
pub use error::{LoadError, SaveError};
pub use item::{InventoryItem, InventoryItemId};
pub use log::InventoryLog;
