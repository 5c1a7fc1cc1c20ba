// Entity Models
//
// Every record type owned by a repository. Identity is fixed at
// construction; quantity-like fields change only through the repository.

pub mod inventory_item;
pub mod patient;
pub mod student;
pub mod transaction;
pub mod warehouse_item;

pub use inventory_item::InventoryItem;
pub use patient::{Patient, Prescription};
pub use student::{letter_grade, Grade, Student};
pub use transaction::Transaction;
pub use warehouse_item::{ElectronicItem, GroceryItem, WarehouseItem};

/// Day-month-year format used when printing dates (e.g. `07-Mar-2025`)
pub const DISPLAY_DATE_FORMAT: &str = "%d-%b-%Y";
