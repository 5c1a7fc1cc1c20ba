// 📦 Inventory Item - what the inventory logger snapshots to disk

use super::DISPLAY_DATE_FORMAT;
use crate::repository::{Identified, Stocked};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: u32,
    pub name: String,
    pub quantity: i64,
    pub date_added: DateTime<Utc>,
}

impl InventoryItem {
    pub fn new(id: u32, name: impl Into<String>, quantity: i64, date_added: DateTime<Utc>) -> Self {
        InventoryItem {
            id,
            name: name.into(),
            quantity,
            date_added,
        }
    }
}

impl Identified for InventoryItem {
    type Id = u32;
    const KIND: &'static str = "Item";

    fn id(&self) -> u32 {
        self.id
    }
}

impl Stocked for InventoryItem {
    fn quantity(&self) -> i64 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }
}

impl fmt::Display for InventoryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (ID: {}, Qty: {}, Added: {})",
            self.name,
            self.id,
            self.quantity,
            self.date_added.format(DISPLAY_DATE_FORMAT)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_display() {
        let added = Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap();
        let item = InventoryItem::new(2, "Rice Bag", 30, added);
        assert_eq!(item.to_string(), "Rice Bag (ID: 2, Qty: 30, Added: 31-Dec-2024)");
    }

    #[test]
    fn test_json_field_names() {
        let added = Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap();
        let item = InventoryItem::new(1, "Laptop", 5, added);
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Laptop");
        assert_eq!(json["quantity"], 5);
        assert!(json["date_added"].is_string());
    }
}
