//! GrantStore - Abstract storage contract for the grant graph
//!
//! This trait defines what operations callers need. How the graph is
//! kept (memory, database, ...) is not their concern.

use shared::{Entity, Result};

/// Storage contract for a directed grant graph between named entities.
///
/// Note: no async here - that is a backend detail. A backend needing
/// async I/O should wrap this contract in an async adapter.
///
/// The mutating operations (`add`, `remove`, `grant`, `revoke`) report a
/// missing name as `StorageError::NotFound`; the lookups (`get`,
/// `grants`) answer `Ok(None)` instead. Callers rely on that asymmetry
/// to tell "absent" from "misuse".
pub trait GrantStore {
    /// Store an entity under its name.
    ///
    /// If the name is already taken the stored instance is returned and
    /// the argument is discarded (first writer wins).
    fn add(&mut self, item: Entity) -> Result<Entity>;

    /// Delete an entity and prune every grant pointing at it.
    fn remove(&mut self, item: &Entity) -> Result<()>;

    /// Add a directed edge `role -> child`. Duplicate edges are a
    /// silent success.
    fn grant(&mut self, role: &Entity, child: &Entity) -> Result<()>;

    /// Remove the edge `role -> child`.
    fn revoke(&mut self, role: &Entity, child: &Entity) -> Result<()>;

    /// Look up an entity by name. Empty and unknown names are `None`.
    fn get(&self, name: &str) -> Result<Option<Entity>>;

    /// All stored roles, in insertion order.
    fn roles(&self) -> Result<Vec<Entity>>;

    /// All stored permissions, in insertion order.
    fn permissions(&self) -> Result<Vec<Entity>>;

    /// Resolve the entities directly granted to `role_name`, in grant
    /// order. Empty and unknown names are `None`.
    fn grants(&self, role_name: &str) -> Result<Option<Vec<Entity>>>;

    /// Total number of stored entities of both kinds.
    fn count(&self) -> Result<usize>;

    /// Check whether a name is taken.
    fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.get(name)?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use shared::{Permission, Role};

    #[test]
    fn test_exists_default_method() {
        let mut store = MemoryStore::new();
        store.add(Role::new("admin").into()).unwrap();

        assert!(store.exists("admin").unwrap());
        assert!(!store.exists("ghost").unwrap());
        assert!(!store.exists("").unwrap());
    }

    #[test]
    fn test_trait_object_usage() {
        let mut store = MemoryStore::new();
        let store: &mut dyn GrantStore = &mut store;

        store.add(Role::new("admin").into()).unwrap();
        store.add(Permission::new("read").into()).unwrap();

        assert_eq!(store.count().unwrap(), 2);
        assert_eq!(store.roles().unwrap().len(), 1);
    }
}
