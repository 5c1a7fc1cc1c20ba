// Recordbook - Core Library
// One keyed repository shared by five small console programs

pub mod config;
pub mod entities;
pub mod error;
pub mod finance;
pub mod grading;
pub mod healthcare;
pub mod inventory_logger;
pub mod logging;
pub mod repository;
pub mod warehouse;

// Re-export commonly used types
pub use config::AppConfig;
pub use entities::{
    letter_grade, ElectronicItem, Grade, GroceryItem, InventoryItem, Patient, Prescription,
    Student, Transaction, WarehouseItem,
};
pub use error::{MalformedReason, RecordError, RecordResult};
pub use finance::{Account, AccountKind, DebitOutcome, FinanceApp, TransactionProcessor};
pub use grading::{parse_students, read_students, write_report};
pub use healthcare::{parse_patient_id, HealthSystemApp};
pub use inventory_logger::{load_snapshot, save_snapshot, InventoryApp, InventoryLogger, LoadOutcome};
pub use repository::{Identified, KeyedRepository, Stocked};
pub use warehouse::{increase_stock, WarehouseManager};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
