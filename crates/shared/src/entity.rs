//! Entity sum type and kind discriminant

use serde::{Deserialize, Serialize};

use crate::permission::Permission;
use crate::role::Role;

/// Discriminant for the two entity kinds.
///
/// Classification is fixed when the entity is constructed; storage and
/// listing operations only ever consult this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityKind {
    Role,
    Permission,
}

impl core::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EntityKind::Role => write!(f, "role"),
            EntityKind::Permission => write!(f, "permission"),
        }
    }
}

/// A storable entity: either a role or a permission.
///
/// The store treats entities as opaque values exposing a unique name and
/// a kind tag; it never inspects any other field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Entity {
    Role(Role),
    Permission(Permission),
}

impl Entity {
    /// Unique name of the underlying entity
    pub fn name(&self) -> &str {
        match self {
            Entity::Role(role) => &role.name,
            Entity::Permission(permission) => &permission.name,
        }
    }

    /// Kind tag of the underlying entity
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Role(_) => EntityKind::Role,
            Entity::Permission(_) => EntityKind::Permission,
        }
    }

    /// Whether this entity can appear on the granting side of an edge
    pub fn is_role(&self) -> bool {
        matches!(self, Entity::Role(_))
    }

    pub fn is_permission(&self) -> bool {
        matches!(self, Entity::Permission(_))
    }

    /// Borrow the inner role, if this is one
    pub fn as_role(&self) -> Option<&Role> {
        match self {
            Entity::Role(role) => Some(role),
            Entity::Permission(_) => None,
        }
    }

    /// Borrow the inner permission, if this is one
    pub fn as_permission(&self) -> Option<&Permission> {
        match self {
            Entity::Role(_) => None,
            Entity::Permission(permission) => Some(permission),
        }
    }
}

impl From<Role> for Entity {
    fn from(role: Role) -> Self {
        Entity::Role(role)
    }
}

impl From<Permission> for Entity {
    fn from(permission: Permission) -> Self {
        Entity::Permission(permission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_name_and_kind() {
        let role: Entity = Role::new("admin").into();
        let perm: Entity = Permission::new("read").into();

        assert_eq!(role.name(), "admin");
        assert_eq!(role.kind(), EntityKind::Role);
        assert!(role.is_role());
        assert!(!role.is_permission());

        assert_eq!(perm.name(), "read");
        assert_eq!(perm.kind(), EntityKind::Permission);
        assert!(perm.is_permission());
        assert!(!perm.is_role());
    }

    #[test]
    fn test_entity_as_accessors() {
        let role: Entity = Role::new("admin").into();

        assert!(role.as_role().is_some());
        assert!(role.as_permission().is_none());
        assert_eq!(role.as_role().map(|r| r.name.as_str()), Some("admin"));
    }

    #[test]
    fn test_entity_kind_display() {
        assert_eq!(EntityKind::Role.to_string(), "role");
        assert_eq!(EntityKind::Permission.to_string(), "permission");
    }

    #[test]
    fn test_entity_serialization_tagged() {
        let role: Entity = Role::new("admin").into();

        let json = serde_json::to_string(&role).unwrap();
        assert!(json.contains("\"kind\":\"role\""));

        let parsed: Entity = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, role);
    }

    #[test]
    fn test_entity_roundtrip_permission() {
        let perm: Entity = Permission::scoped("read", "article").into();

        let json = serde_json::to_string(&perm).unwrap();
        let parsed: Entity = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.name(), "read_article");
        assert!(parsed.is_permission());
    }
}
