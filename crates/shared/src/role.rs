//! Role entity type

use serde::{Deserialize, Serialize};

/// A grantable group that can hold permissions and other roles.
///
/// The `name` is the unique key under which the role is stored; two
/// entities (of any kind) can never share a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    /// Unique role name (e.g. 'admin', 'editor')
    pub name: String,

    /// Human-readable description
    #[serde(default)]
    pub description: String,
}

impl Role {
    /// Create a new role with minimal configuration
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
        }
    }

    /// Builder: set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_creation() {
        let role = Role::new("admin").with_description("Full system access");

        assert_eq!(role.name, "admin");
        assert_eq!(role.description, "Full system access");
    }

    #[test]
    fn test_role_new_minimal() {
        let role = Role::new("guest");

        assert_eq!(role.name, "guest");
        assert!(role.description.is_empty());
    }

    #[test]
    fn test_role_serialization_roundtrip() {
        let role = Role::new("editor").with_description("Can edit articles");

        let json = serde_json::to_string(&role).unwrap();
        let parsed: Role = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, role);
    }

    #[test]
    fn test_role_deserialization_without_description() {
        let json = r#"{"name": "viewer"}"#;

        let role: Role = serde_json::from_str(json).unwrap();
        assert_eq!(role.name, "viewer");
        assert!(role.description.is_empty());
    }

    #[test]
    fn test_role_with_unicode_name() {
        let role = Role::new("管理者");
        assert_eq!(role.name, "管理者");
    }

    #[test]
    fn test_role_with_very_long_name() {
        let long_name = "a".repeat(10000);
        let role = Role::new(long_name.clone());
        assert_eq!(role.name, long_name);
    }
}
