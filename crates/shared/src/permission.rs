//! Permission entity type

use serde::{Deserialize, Serialize};

/// A grantable capability or right.
///
/// Permissions share one namespace with roles; the `name` must be unique
/// across the whole store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    /// Unique permission name (e.g. 'read', 'delete_article')
    pub name: String,

    /// Human-readable description
    #[serde(default)]
    pub description: String,
}

impl Permission {
    /// Create a new permission with minimal configuration
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
        }
    }

    /// Create a permission named after an action on a resource
    /// (e.g. `scoped("read", "article")` -> 'read_article')
    pub fn scoped(action: impl AsRef<str>, resource: impl AsRef<str>) -> Self {
        Self::new(format!("{}_{}", action.as_ref(), resource.as_ref()))
    }

    /// Builder: set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
