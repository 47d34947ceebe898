use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use recordkeep_core::{Entity, numeric_id};

numeric_id! {
    /// Inventory item identifier.
    pub struct InventoryItemId;
}

/// Immutable inventory record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: InventoryItemId,
    pub name: String,
    pub quantity: i64,
    pub date_added: DateTime<Utc>,
}

impl InventoryItem {
    pub fn new(
        id: InventoryItemId,
        name: impl Into<String>,
        quantity: i64,
        date_added: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            date_added,
        }
    }
}

impl Entity for InventoryItem {
    type Id = InventoryItemId;
    const KIND: &'static str = "inventory item";

    fn id(&self) -> InventoryItemId {
        self.id
    }
}

impl core::fmt::Display for InventoryItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Quantity: {}, Date Added: {}",
            self.id,
            self.name,
            self.quantity,
            self.date_added.format("%Y-%m-%d %H:%M:%S")
        )
    }
}
