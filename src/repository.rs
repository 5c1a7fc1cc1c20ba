// Keyed Repository - in-memory, duplicate-free collection of entities
//
// Storage is a flat arena (Vec) plus an identifier -> slot index.
// Callers address entries by identifier only; nothing hands out a mutable
// reference into the arena, so every mutation goes through this type.
//
// Iteration order is insertion order. Removal shifts later slots down and
// re-indexes them, which keeps that order stable.

use crate::error::{RecordError, RecordResult};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use tracing::{debug, warn};

// ============================================================================
// CAPABILITY TRAITS
// ============================================================================

/// Anything with a stable identifier that a repository can key on
pub trait Identified {
    type Id: Eq + Hash + Clone + fmt::Display + fmt::Debug;

    /// Human-readable entity name used in error messages ("Item", "Patient")
    const KIND: &'static str;

    fn id(&self) -> Self::Id;
}

/// Entities carrying a quantity-like field that may be updated in place
pub trait Stocked: Identified {
    fn quantity(&self) -> i64;
    fn set_quantity(&mut self, quantity: i64);
}

// ============================================================================
// REPOSITORY
// ============================================================================

#[derive(Debug, Clone)]
pub struct KeyedRepository<T: Identified> {
    entries: Vec<T>,
    index: HashMap<T::Id, usize>,
}

impl<T: Identified> KeyedRepository<T> {
    pub fn new() -> Self {
        KeyedRepository {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Build a repository from a batch, failing on the first repeated identifier
    pub fn from_entities<I>(entities: I) -> RecordResult<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut repo = Self::new();
        for entity in entities {
            repo.add(entity)?;
        }
        Ok(repo)
    }

    /// Insert a new entity
    ///
    /// Fails with `DuplicateKey` when the identifier is taken; the stored
    /// entity is left untouched in that case.
    pub fn add(&mut self, entity: T) -> RecordResult<()> {
        let id = entity.id();
        if self.index.contains_key(&id) {
            warn!(kind = T::KIND, id = %id, "rejected duplicate add");
            return Err(RecordError::DuplicateKey {
                kind: T::KIND,
                id: id.to_string(),
            });
        }

        debug!(kind = T::KIND, id = %id, "entity added");
        self.index.insert(id, self.entries.len());
        self.entries.push(entity);
        Ok(())
    }

    pub fn get_by_id(&self, id: &T::Id) -> RecordResult<&T> {
        self.slot(id, "").map(|slot| &self.entries[slot])
    }

    /// Delete an entity, handing it back to the caller
    pub fn remove(&mut self, id: &T::Id) -> RecordResult<T> {
        let slot = self.slot(id, " for removal")?;
        self.index.remove(id);
        let removed = self.entries.remove(slot);

        for later in self.index.values_mut() {
            if *later > slot {
                *later -= 1;
            }
        }

        debug!(kind = T::KIND, id = %id, "entity removed");
        Ok(removed)
    }

    /// Snapshot copy of every stored entity, in insertion order
    pub fn list_all(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.entries.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Position of `id`; `context` is appended to the not-found message
    fn slot(&self, id: &T::Id, context: &'static str) -> RecordResult<usize> {
        self.index.get(id).copied().ok_or_else(|| {
            warn!(kind = T::KIND, id = %id, context, "entity not found");
            RecordError::NotFound {
                kind: T::KIND,
                id: id.to_string(),
                context,
            }
        })
    }
}

impl<T: Stocked> KeyedRepository<T> {
    /// Overwrite the quantity of one entity
    ///
    /// Negative values are rejected before the identifier is looked up.
    pub fn update_quantity(&mut self, id: &T::Id, new_quantity: i64) -> RecordResult<()> {
        if new_quantity < 0 {
            warn!(kind = T::KIND, id = %id, new_quantity, "rejected negative quantity");
            return Err(RecordError::InvalidValue {
                field: "quantity",
                value: new_quantity.to_string(),
                reason: "Quantity cannot be negative.",
            });
        }

        let slot = self.slot(id, " for update")?;
        self.entries[slot].set_quantity(new_quantity);
        debug!(kind = T::KIND, id = %id, new_quantity, "quantity updated");
        Ok(())
    }
}

impl<T: Identified> Default for KeyedRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
