// 📦 Inventory Logger - repository + JSON snapshot file
//
// The snapshot is a pretty-printed JSON array of entities. Writes go to a
// temp file in the same directory and are renamed over the target, so a
// crash mid-save leaves the previous snapshot intact.

use crate::entities::InventoryItem;
use crate::error::{RecordError, RecordResult};
use crate::repository::{Identified, KeyedRepository, Stocked};
use anyhow::Result;
use chrono::{Duration, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Result of reading a snapshot back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Snapshot read; contents replaced with this many entities
    Loaded(usize),
    /// No snapshot on disk; contents untouched
    Missing,
}

// ============================================================================
// SNAPSHOT I/O
// ============================================================================

/// Serialize `entities` and atomically replace `path` with them
pub fn save_snapshot<T: Serialize>(path: &Path, entities: &[T]) -> RecordResult<()> {
    let json = serde_json::to_vec_pretty(entities).map_err(|source| RecordError::Snapshot {
        path: path.to_path_buf(),
        source,
    })?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| RecordError::io(dir, e))?;
    tmp.write_all(&json).map_err(|e| RecordError::io(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| RecordError::io(path, e.error))?;

    debug!(path = %path.display(), count = entities.len(), "snapshot written");
    Ok(())
}

/// Read a snapshot; `Ok(None)` when the file does not exist
pub fn load_snapshot<T: DeserializeOwned>(path: &Path) -> RecordResult<Option<Vec<T>>> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(RecordError::io(path, e)),
    };

    let entities = serde_json::from_slice(&bytes).map_err(|source| RecordError::Snapshot {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(entities))
}

// ============================================================================
// LOGGER
// ============================================================================

pub struct InventoryLogger<T: Identified> {
    repo: KeyedRepository<T>,
    file_path: PathBuf,
}

impl<T> InventoryLogger<T>
where
    T: Identified + Clone + Serialize + DeserializeOwned,
{
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        InventoryLogger {
            repo: KeyedRepository::new(),
            file_path: file_path.into(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn add(&mut self, item: T) -> RecordResult<()> {
        self.repo.add(item)
    }

    pub fn get_all(&self) -> Vec<T> {
        self.repo.list_all()
    }

    pub fn save_to_file(&self) -> RecordResult<()> {
        let items = self.repo.list_all();
        save_snapshot(&self.file_path, &items)?;
        info!(path = %self.file_path.display(), count = items.len(), "inventory saved");
        Ok(())
    }

    /// Replace the in-memory contents with the snapshot on disk
    ///
    /// On any error (unreadable file, bad JSON, duplicate ids) the current
    /// contents are kept.
    pub fn load_from_file(&mut self) -> RecordResult<LoadOutcome> {
        let Some(items) = load_snapshot::<T>(&self.file_path)? else {
            return Ok(LoadOutcome::Missing);
        };

        let repo = KeyedRepository::from_entities(items)?;
        let count = repo.len();
        self.repo = repo;
        info!(path = %self.file_path.display(), count, "inventory loaded");
        Ok(LoadOutcome::Loaded(count))
    }
}

impl<T> InventoryLogger<T>
where
    T: Stocked + Clone + Serialize + DeserializeOwned,
{
    /// Set one item's stock level; the snapshot changes on the next save
    pub fn update_quantity(&mut self, id: &T::Id, quantity: i64) -> RecordResult<()> {
        self.repo.update_quantity(id, quantity)
    }
}

// ============================================================================
// PROGRAM
// ============================================================================

pub struct InventoryApp {
    logger: InventoryLogger<InventoryItem>,
}

impl InventoryApp {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        InventoryApp {
            logger: InventoryLogger::new(file_path),
        }
    }

    pub fn seed_sample_data(&mut self) -> RecordResult<()> {
        let now = Utc::now();
        self.logger.add(InventoryItem::new(1, "Laptop", 5, now))?;
        self.logger
            .add(InventoryItem::new(2, "Rice Bag", 30, now - Duration::days(2)))?;
        self.logger
            .add(InventoryItem::new(3, "Desk Chair", 10, now - Duration::days(7)))?;
        Ok(())
    }

    pub fn save_data(&self, out: &mut impl Write) -> Result<()> {
        match self.logger.save_to_file() {
            Ok(()) => writeln!(out, "✅ Data saved to {}", self.logger.file_path().display())?,
            Err(e) => writeln!(out, "❌ Error saving file: {}", e)?,
        }
        Ok(())
    }

    pub fn load_data(&mut self, out: &mut impl Write) -> Result<()> {
        match self.logger.load_from_file() {
            Ok(LoadOutcome::Loaded(_)) => {
                writeln!(out, "✅ Data loaded from {}", self.logger.file_path().display())?
            }
            Ok(LoadOutcome::Missing) => writeln!(out, "⚠ No saved file found.")?,
            Err(e) => writeln!(out, "❌ Error loading file: {}", e)?,
        }
        Ok(())
    }

    pub fn print_all_items(&self, out: &mut impl Write) -> Result<()> {
        for item in self.logger.get_all() {
            writeln!(out, "{}", item)?;
        }
        Ok(())
    }

    pub fn items(&self) -> Vec<InventoryItem> {
        self.logger.get_all()
    }
}

/// Seed, save, then reload into a fresh session and print
pub fn run(file_path: &Path, out: &mut impl Write) -> Result<()> {
    let mut app = InventoryApp::new(file_path);
    app.seed_sample_data()?;
    app.save_data(out)?;

    writeln!(out, "\n--- Simulating New Session ---\n")?;

    let mut reloaded = InventoryApp::new(file_path);
    reloaded.load_data(out)?;
    reloaded.print_all_items(out)?;
    Ok(())
}
