//! Repository abstraction over id-keyed record storage

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

/// CRUD storage for one record type keyed by id
pub trait Repository<K, V> {
    /// Get a record by id
    fn get(&self, id: &K) -> Option<&V>;

    /// Get a mutable record by id
    fn get_mut(&mut self, id: &K) -> Option<&mut V>;

    /// Insert a record, returning the previous record for that id
    fn insert(&mut self, id: K, value: V) -> Option<V>;

    /// Remove a record by id
    fn remove(&mut self, id: &K) -> Option<V>;

    /// Check whether a record exists
    fn contains(&self, id: &K) -> bool;

    /// All records, in storage order
    fn values(&self) -> Vec<&V>;

    /// Number of records
    fn len(&self) -> usize;

    /// Check if empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory repository backed by a HashMap
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryRepository<K: Eq + Hash, V> {
    items: HashMap<K, V>,
}

impl<K: Eq + Hash, V> MemoryRepository<K, V> {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    /// Iterate over all records
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.items.iter()
    }
}

impl<K: Eq + Hash, V> Default for MemoryRepository<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V> Repository<K, V> for MemoryRepository<K, V> {
    fn get(&self, id: &K) -> Option<&V> {
        self.items.get(id)
    }

    fn get_mut(&mut self, id: &K) -> Option<&mut V> {
        self.items.get_mut(id)
    }

    fn insert(&mut self, id: K, value: V) -> Option<V> {
        self.items.insert(id, value)
    }

    fn remove(&mut self, id: &K) -> Option<V> {
        self.items.remove(id)
    }

    fn contains(&self, id: &K) -> bool {
        self.items.contains_key(id)
    }

    fn values(&self) -> Vec<&V> {
        self.items.values().collect()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
