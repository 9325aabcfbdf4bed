//! In-memory settings backend.

use hashbrown::HashMap;

use super::{KvStore, KvValue, PersistResult};

/// Volatile [`KvStore`] backed by a hash map. Nothing survives a drop.
#[derive(Debug, Clone, Default)]
pub struct MemoryKv {
    entries: HashMap<String, KvValue>,
}

impl MemoryKv {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no key is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KvStore for MemoryKv {
    fn get(&self, key: &str) -> PersistResult<Option<KvValue>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: KvValue) -> PersistResult<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> PersistResult<bool> {
        Ok(self.entries.remove(key).is_some())
    }
}
