// 🏭 Warehouse - electronics + grocery stock, with failure demos
//
// Every operation here catches the repository's error, prints it, and lets
// the run continue.

use crate::entities::{ElectronicItem, GroceryItem, WarehouseItem};
use crate::error::{RecordError, RecordResult};
use crate::repository::KeyedRepository;
use anyhow::Result;
use chrono::{Duration, Months, Utc};
use std::io::Write;

#[derive(Default)]
pub struct WarehouseManager {
    electronics: KeyedRepository<ElectronicItem>,
    groceries: KeyedRepository<GroceryItem>,
}

impl WarehouseManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn electronics(&self) -> &KeyedRepository<ElectronicItem> {
        &self.electronics
    }

    pub fn groceries(&self) -> &KeyedRepository<GroceryItem> {
        &self.groceries
    }

    pub fn electronics_mut(&mut self) -> &mut KeyedRepository<ElectronicItem> {
        &mut self.electronics
    }

    pub fn groceries_mut(&mut self) -> &mut KeyedRepository<GroceryItem> {
        &mut self.groceries
    }

    pub fn seed_data(&mut self) -> RecordResult<()> {
        self.electronics
            .add(ElectronicItem::new(1, "Laptop", 5, "Dell", 24))?;
        self.electronics
            .add(ElectronicItem::new(2, "Smartphone", 10, "Samsung", 12))?;

        let today = Utc::now().date_naive();
        let six_months = today.checked_add_months(Months::new(6)).unwrap_or(today);
        self.groceries
            .add(GroceryItem::new(101, "Rice", 50, six_months))?;
        self.groceries
            .add(GroceryItem::new(102, "Milk", 20, today + Duration::days(10)))?;
        Ok(())
    }

    /// Exercise the three failure paths, printing each caught error
    pub fn run_tests(&mut self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "\n--- Grocery Items ---")?;
        print_all_items(&self.groceries, out)?;

        writeln!(out, "\n--- Electronic Items ---")?;
        print_all_items(&self.electronics, out)?;

        writeln!(out, "\n--- Testing Exceptions ---")?;
        report(
            out,
            self.electronics
                .add(ElectronicItem::new(1, "Tablet", 3, "Apple", 18)),
        )?;
        report(out, self.groceries.remove(&999).map(|_| ()))?;
        report(out, self.electronics.update_quantity(&2, -5))?;
        Ok(())
    }
}

pub fn print_all_items<T: WarehouseItem>(repo: &KeyedRepository<T>, out: &mut impl Write) -> Result<()> {
    for item in repo.iter() {
        writeln!(out, "{}", item)?;
    }
    Ok(())
}

/// Add `delta` to an item's stock, returning the new quantity
pub fn increase_stock<T: WarehouseItem>(repo: &mut KeyedRepository<T>, id: u32, delta: i64) -> RecordResult<i64> {
    let current = repo.get_by_id(&id)?.quantity();
    let updated = current.checked_add(delta).ok_or(RecordError::InvalidValue {
        field: "quantity",
        value: delta.to_string(),
        reason: "Quantity overflow.",
    })?;
    repo.update_quantity(&id, updated)?;
    Ok(updated)
}

/// Printing wrapper around `increase_stock`
pub fn print_increase_stock<T: WarehouseItem>(
    repo: &mut KeyedRepository<T>,
    id: u32,
    delta: i64,
    out: &mut impl Write,
) -> Result<()> {
    match increase_stock(repo, id, delta) {
        Ok(quantity) => {
            let name = repo.get_by_id(&id).map(|item| item.name().to_string())?;
            writeln!(out, "Stock updated for {}. New quantity: {}", name, quantity)?;
        }
        Err(e) => writeln!(out, "Error updating stock: {}", e)?,
    }
    Ok(())
}

/// Printing wrapper around `KeyedRepository::remove`
pub fn print_remove_item<T: WarehouseItem>(
    repo: &mut KeyedRepository<T>,
    id: u32,
    out: &mut impl Write,
) -> Result<()> {
    match repo.remove(&id) {
        Ok(_) => writeln!(out, "Item with ID {} removed successfully.", id)?,
        Err(e) => writeln!(out, "Error removing item: {}", e)?,
    }
    Ok(())
}

/// Print a caught repository error with its category label
fn report(out: &mut impl Write, result: RecordResult<()>) -> Result<()> {
    let Err(e) = result else {
        return Ok(());
    };
    let label = match e {
        RecordError::DuplicateKey { .. } => "Duplicate Error",
        RecordError::NotFound { .. } => "Not Found Error",
        RecordError::InvalidValue { .. } => "Quantity Error",
        _ => "Error",
    };
    writeln!(out, "{}: {}", label, e)?;
    Ok(())
}

pub fn run(out: &mut impl Write) -> Result<()> {
    let mut manager = WarehouseManager::new();
    manager.seed_data()?;
    manager.run_tests(out)?;

    writeln!(out, "\n--- Stock Adjustments ---")?;
    print_increase_stock(manager.electronics_mut(), 1, 3, out)?;
    print_increase_stock(manager.groceries_mut(), 103, 5, out)?;
    print_remove_item(manager.groceries_mut(), 102, out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> WarehouseManager {
        let mut manager = WarehouseManager::new();
        manager.seed_data().unwrap();
        manager
    }

    #[test]
    fn test_seed_counts() {
        let manager = seeded();
        assert_eq!(manager.electronics().len(), 2);
        assert_eq!(manager.groceries().len(), 2);
    }

    #[test]
    fn test_increase_stock() {
        let mut manager = seeded();
        let quantity = increase_stock(manager.electronics_mut(), 1, 3).unwrap();
        assert_eq!(quantity, 8);
        assert_eq!(manager.electronics().get_by_id(&1).unwrap().quantity, 8);
    }

    #[test]
    fn test_increase_stock_below_zero_rejected() {
        let mut manager = seeded();
        let err = increase_stock(manager.groceries_mut(), 102, -21).unwrap_err();
        assert!(matches!(err, RecordError::InvalidValue { .. }));
        assert_eq!(manager.groceries().get_by_id(&102).unwrap().quantity, 20);
    }

    #[test]
    fn test_increase_stock_missing_item() {
        let mut manager = seeded();
        let err = increase_stock(manager.groceries_mut(), 555, 1).unwrap_err();
        assert!(matches!(err, RecordError::NotFound { .. }));
    }

    #[test]
    fn test_run_tests_reports_each_failure() {
        let mut manager = seeded();
        let mut out = Vec::new();
        manager.run_tests(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Laptop (ID: 1, Brand: Dell, Qty: 5, Warranty: 24 months)"));
        assert!(text.contains("Duplicate Error: Item with ID 1 already exists."));
        assert!(text.contains("Not Found Error: Item with ID 999 not found for removal."));
        assert!(text.contains("Quantity Error: Invalid quantity `-5`: Quantity cannot be negative."));

        // Failed operations leave state alone
        assert_eq!(manager.electronics().get_by_id(&1).unwrap().name, "Laptop");
        assert_eq!(manager.electronics().get_by_id(&2).unwrap().quantity, 10);
    }

    #[test]
    fn test_remove_missing_item_message() {
        let mut manager = seeded();
        let mut out = Vec::new();
        print_remove_item(manager.electronics_mut(), 42, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Error removing item: Item with ID 42 not found for removal.\n"
        );
    }

    #[test]
    fn test_run_output_tail() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Stock updated for Laptop. New quantity: 8"));
        assert!(text.contains("Error updating stock: Item with ID 103 not found."));
        assert!(text.ends_with("Item with ID 102 removed successfully.\n"));
        assert!(!text.contains("not found for update"));
    }
}
