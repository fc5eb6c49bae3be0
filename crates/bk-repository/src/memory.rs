//! In-memory repository for tests, prototyping, and ephemeral sessions.
//!
//! [`MemoryRepository`] keeps objects in a `BTreeMap` keyed by primary key,
//! plus an index recording the order in which keys were first stored. Reads
//! that return many objects follow that index, so results come back in
//! insertion order; replacing an object keeps its position.

use std::collections::BTreeMap;
use std::fmt;

use bk_types::{Model, Pk};
use tracing::{debug, trace, warn};

use crate::config::{RepositoryConfig, UpdatePolicy};
use crate::error::{RepositoryError, RepositoryResult};
use crate::filter::{Patterns, Where};
use crate::traits::Repository;

/// A stored object and its position in the insertion order.
struct Slot<T> {
    seq: u64,
    obj: T,
}

/// An in-memory implementation of [`Repository`].
///
/// Objects are cloned on the way in and on the way out. Data is lost when
/// the repository is dropped.
pub struct MemoryRepository<T: Model> {
    entries: BTreeMap<Pk, Slot<T>>,
    order: BTreeMap<u64, Pk>,
    next_seq: u64,
    /// `None` once the key space is used up.
    next_pk: Option<Pk>,
    config: RepositoryConfig,
}

impl<T: Model> MemoryRepository<T> {
    /// Create a new empty repository with the default configuration.
    pub fn new() -> Self {
        Self::with_config(RepositoryConfig::default())
    }

    /// Create a new empty repository with the given configuration.
    pub fn with_config(config: RepositoryConfig) -> Self {
        Self {
            entries: BTreeMap::new(),
            order: BTreeMap::new(),
            next_seq: 0,
            next_pk: Some(Pk::FIRST),
            config,
        }
    }

    pub fn config(&self) -> &RepositoryConfig {
        &self.config
    }

    /// Number of objects currently stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the repository is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys of all stored objects, in insertion order.
    pub fn pks(&self) -> Vec<Pk> {
        self.order.values().copied().collect()
    }

    /// The key the next `add` will assign, or `None` if the key space is
    /// exhausted.
    pub fn next_pk(&self) -> Option<Pk> {
        self.next_pk
    }

    /// Remove all objects. The key counter is kept, so keys handed out
    /// before the clear are still never reused.
    pub fn clear(&mut self) {
        let count = self.entries.len();
        self.entries.clear();
        self.order.clear();
        debug!(count, "repository cleared");
    }

    /// Borrowing iterator over stored objects in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Pk, &T)> {
        self.order
            .values()
            .filter_map(|pk| self.entries.get(pk).map(|slot| (*pk, &slot.obj)))
    }

    fn select<F>(&self, mut keep: F) -> RepositoryResult<Vec<T>>
    where
        F: FnMut(&T) -> RepositoryResult<bool>,
    {
        let mut out = Vec::new();
        for (_, obj) in self.iter() {
            if keep(obj)? {
                out.push(obj.clone());
            }
        }
        Ok(out)
    }

    /// Store `obj` under `pk`, appending it to the insertion order if the
    /// key is new.
    fn store(&mut self, pk: Pk, obj: T) {
        if let Some(slot) = self.entries.get_mut(&pk) {
            slot.obj = obj;
            return;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.order.insert(seq, pk);
        self.entries.insert(pk, Slot { seq, obj });
    }
}

impl<T: Model> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Model> Repository<T> for MemoryRepository<T> {
    fn add(&mut self, obj: &mut T) -> RepositoryResult<Pk> {
        let current = obj.pk();
        if current.is_set() {
            return Err(RepositoryError::AlreadyPersisted(current));
        }
        let pk = self.next_pk.ok_or(RepositoryError::KeySpaceExhausted)?;
        self.next_pk = pk.checked_next();
        obj.set_pk(pk);
        self.store(pk, obj.clone());
        debug!(pk = %pk, "object added");
        Ok(pk)
    }

    fn get(&self, pk: Pk) -> RepositoryResult<Option<T>> {
        Ok(self.entries.get(&pk).map(|slot| slot.obj.clone()))
    }

    fn get_all(&self, filter: Option<&Where>) -> RepositoryResult<Vec<T>> {
        match filter {
            Some(filter) if !filter.is_empty() => {
                let found = self.select(|obj| filter.matches(obj))?;
                trace!(conditions = filter.len(), matched = found.len(), "filtered scan");
                Ok(found)
            }
            _ => Ok(self.iter().map(|(_, obj)| obj.clone()).collect()),
        }
    }

    fn get_all_by_pattern(&self, patterns: &Patterns) -> RepositoryResult<Vec<T>> {
        let found = self.select(|obj| patterns.matches(obj))?;
        trace!(
            conditions = patterns.len(),
            matched = found.len(),
            "pattern scan"
        );
        Ok(found)
    }

    fn update(&mut self, obj: &T) -> RepositoryResult<()> {
        let pk = obj.pk();
        if pk.is_unset() {
            return Err(RepositoryError::NotPersisted);
        }
        if self.entries.contains_key(&pk) {
            self.store(pk, obj.clone());
            debug!(pk = %pk, "object updated");
            return Ok(());
        }
        match self.config.update_policy {
            UpdatePolicy::Strict => Err(RepositoryError::NotFound(pk)),
            UpdatePolicy::Upsert => {
                if let Some(next) = self.next_pk {
                    if pk >= next {
                        self.next_pk = pk.checked_next();
                    }
                }
                self.store(pk, obj.clone());
                warn!(pk = %pk, "update inserted an unknown key");
                Ok(())
            }
        }
    }

    fn delete(&mut self, pk: Pk) -> RepositoryResult<()> {
        let slot = self
            .entries
            .remove(&pk)
            .ok_or(RepositoryError::NotFound(pk))?;
        self.order.remove(&slot.seq);
        debug!(pk = %pk, "object deleted");
        Ok(())
    }

    fn contains(&self, pk: Pk) -> RepositoryResult<bool> {
        Ok(self.entries.contains_key(&pk))
    }

    fn count(&self) -> RepositoryResult<usize> {
        Ok(self.entries.len())
    }
}

impl<T: Model> fmt::Debug for MemoryRepository<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryRepository")
            .field("object_count", &self.entries.len())
            .field("next_pk", &self.next_pk)
            .field("update_policy", &self.config.update_policy)
            .finish()
    }
}
