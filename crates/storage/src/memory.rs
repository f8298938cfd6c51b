//! In-memory grant store
//!
//! Thread-safe implementation using RwLock; clones share one table.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;
use tracing::debug;

use shared::{Entity, Result, StorageError};

use crate::store::GrantStore;

/// One stored entity and the names it directly grants.
#[derive(Debug, Clone)]
struct Entry {
    instance: Entity,
    /// Child names in insertion order; never contains duplicates or the
    /// entry's own name, and every name resolves to a live entry.
    grants: Vec<String>,
}

/// In-memory grant store.
///
/// One `IndexMap` keyed by entity name holds the whole graph; the map is
/// insertion-ordered so listings and grant resolution are deterministic.
/// Every operation takes the lock once for its entire body, so mutations
/// never interleave and reads always see a consistent graph.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Arc<RwLock<IndexMap<String, Entry>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, IndexMap<String, Entry>>> {
        self.items.read().map_err(|_| StorageError::Backend {
            message: "failed to acquire read lock".to_string(),
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, IndexMap<String, Entry>>> {
        self.items.write().map_err(|_| StorageError::Backend {
            message: "failed to acquire write lock".to_string(),
        })
    }
}

impl GrantStore for MemoryStore {
    fn add(&mut self, item: Entity) -> Result<Entity> {
        let mut items = self.write()?;

        // first writer wins; the incoming duplicate is discarded
        if let Some(entry) = items.get(item.name()) {
            return Ok(entry.instance.clone());
        }

        debug!(name = %item.name(), kind = %item.kind(), "entity added");
        items.insert(
            item.name().to_string(),
            Entry {
                instance: item.clone(),
                grants: Vec::new(),
            },
        );
        Ok(item)
    }

    fn remove(&mut self, item: &Entity) -> Result<()> {
        let name = item.name();
        let mut items = self.write()?;

        if !items.contains_key(name) {
            return Err(StorageError::NotFound {
                name: name.to_string(),
            });
        }

        // revoke from every entry before dropping the entry itself, so no
        // grant list ever names a missing entity
        for entry in items.values_mut() {
            if let Some(index) = entry.grants.iter().position(|grant| grant == name) {
                entry.grants.remove(index);
            }
        }

        items.shift_remove(name);
        debug!(name = %name, "entity removed");
        Ok(())
    }

    fn grant(&mut self, role: &Entity, child: &Entity) -> Result<()> {
        let name = role.name();
        let child_name = child.name();
        let mut items = self.write()?;

        if !items.contains_key(name) {
            return Err(StorageError::NotFound {
                name: name.to_string(),
            });
        }
        if !items.contains_key(child_name) {
            return Err(StorageError::NotFound {
                name: child_name.to_string(),
            });
        }
        if !role.is_role() {
            return Err(StorageError::TypeMismatch {
                name: name.to_string(),
            });
        }
        if name == child_name {
            return Err(StorageError::SelfGrant {
                name: name.to_string(),
            });
        }

        let entry = items.get_mut(name).ok_or_else(|| StorageError::NotFound {
            name: name.to_string(),
        })?;

        if entry.grants.iter().any(|grant| grant == child_name) {
            return Ok(());
        }

        entry.grants.push(child_name.to_string());
        debug!(role = %name, child = %child_name, "granted");
        Ok(())
    }

    fn revoke(&mut self, role: &Entity, child: &Entity) -> Result<()> {
        let name = role.name();
        let child_name = child.name();
        let mut items = self.write()?;

        // existence checks only; the granting side's kind is not re-checked
        if !items.contains_key(name) {
            return Err(StorageError::NotFound {
                name: name.to_string(),
            });
        }
        if !items.contains_key(child_name) {
            return Err(StorageError::NotFound {
                name: child_name.to_string(),
            });
        }

        let entry = items.get_mut(name).ok_or_else(|| StorageError::NotFound {
            name: name.to_string(),
        })?;

        match entry.grants.iter().position(|grant| grant == child_name) {
            Some(index) => {
                entry.grants.remove(index);
                debug!(role = %name, child = %child_name, "revoked");
                Ok(())
            }
            None => Err(StorageError::GrantNotFound {
                role: name.to_string(),
                child: child_name.to_string(),
            }),
        }
    }

    fn get(&self, name: &str) -> Result<Option<Entity>> {
        if name.is_empty() {
            return Ok(None);
        }

        let items = self.read()?;
        Ok(items.get(name).map(|entry| entry.instance.clone()))
    }

    fn roles(&self) -> Result<Vec<Entity>> {
        let items = self.read()?;
        Ok(items
            .values()
            .filter(|entry| entry.instance.is_role())
            .map(|entry| entry.instance.clone())
            .collect())
    }

    fn permissions(&self) -> Result<Vec<Entity>> {
        let items = self.read()?;
        Ok(items
            .values()
            .filter(|entry| entry.instance.is_permission())
            .map(|entry| entry.instance.clone())
            .collect())
    }

    fn grants(&self, role_name: &str) -> Result<Option<Vec<Entity>>> {
        if role_name.is_empty() {
            return Ok(None);
        }

        let items = self.read()?;
        let entry = match items.get(role_name) {
            Some(entry) => entry,
            None => return Ok(None),
        };

        // a name that no longer resolves is skipped, not reported
        let resolved = entry
            .grants
            .iter()
            .filter_map(|name| items.get(name))
            .map(|entry| entry.instance.clone())
            .collect();

        Ok(Some(resolved))
    }

    fn count(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }
}
