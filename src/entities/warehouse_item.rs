// 🏭 Warehouse Items - electronics and groceries
//
// Both kinds share identity, name and a mutable stock count; the rest of
// their fields are fixed at construction.

use super::DISPLAY_DATE_FORMAT;
use crate::repository::{Identified, Stocked};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stocked item the warehouse manager can print and restock generically
pub trait WarehouseItem: Identified<Id = u32> + Stocked + fmt::Display + Clone {
    fn name(&self) -> &str;
}

// ============================================================================
// ELECTRONICS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectronicItem {
    pub id: u32,
    pub name: String,
    pub quantity: i64,
    pub brand: String,
    pub warranty_months: u32,
}

impl ElectronicItem {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        quantity: i64,
        brand: impl Into<String>,
        warranty_months: u32,
    ) -> Self {
        ElectronicItem {
            id,
            name: name.into(),
            quantity,
            brand: brand.into(),
            warranty_months,
        }
    }
}

impl Identified for ElectronicItem {
    type Id = u32;
    const KIND: &'static str = "Item";

    fn id(&self) -> u32 {
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

impl WarehouseItem for ElectronicItem {
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ElectronicItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (ID: {}, Brand: {}, Qty: {}, Warranty: {} months)",
            self.name, self.id, self.brand, self.quantity, self.warranty_months
        )
    }
}

// ============================================================================
// GROCERIES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryItem {
    pub id: u32,
    pub name: String,
    pub quantity: i64,
    pub expiry_date: NaiveDate,
}

impl GroceryItem {
    pub fn new(id: u32, name: impl Into<String>, quantity: i64, expiry_date: NaiveDate) -> Self {
        GroceryItem {
            id,
            name: name.into(),
            quantity,
            expiry_date,
        }
    }
}

impl Identified for GroceryItem {
    type Id = u32;
    const KIND: &'static str = "Item";

    fn id(&self) -> u32 {
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

impl WarehouseItem for GroceryItem {
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for GroceryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (ID: {}, Qty: {}, Expires: {})",
            self.name,
            self.id,
            self.quantity,
            self.expiry_date.format(DISPLAY_DATE_FORMAT)
        )
    }
}
