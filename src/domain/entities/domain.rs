use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Association from permission-type to the set of grants for that type.
///
/// Keys are permission-type names, unique per mapping; values are sets, so
/// duplicates are eliminated on merge and ordering carries no meaning.
pub type PermissionMap<T> = HashMap<String, HashSet<T>>;

/// An isolated tenancy scope in which a user holds a distinct set of roles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Domain {
    pub code: String,
    pub roles: Vec<Role>,
}

impl Domain {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            roles: Vec::new(),
        }
    }

    pub fn with_roles(mut self, roles: Vec<Role>) -> Self {
        self.roles = roles;
        self
    }

    /// Codes of every role granted within this domain
    pub fn role_codes(&self) -> Vec<String> {
        self.roles.iter().map(|r| r.code.clone()).collect()
    }
}

/// A named bundle of permissions assignable to a user within one domain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub code: String,
    /// permission-type -> permission codes
    pub perm_map: PermissionMap<String>,
    /// permission-type -> full permission records
    pub perm_detail_map: PermissionMap<PermissionObject>,
}

impl Role {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            perm_map: PermissionMap::new(),
            perm_detail_map: PermissionMap::new(),
        }
    }

    /// Grant a permission code under a permission type
    pub fn grant(mut self, permission_type: impl Into<String>, code: impl Into<String>) -> Self {
        self.perm_map
            .entry(permission_type.into())
            .or_default()
            .insert(code.into());
        self
    }

    /// Grant a full permission record under its own permission type
    pub fn grant_detail(mut self, permission: PermissionObject) -> Self {
        self.perm_detail_map
            .entry(permission.permission_type.clone())
            .or_default()
            .insert(permission);
        self
    }
}

/// Full metadata for a single permission, beyond its code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PermissionObject {
    pub id: i64,
    pub value: String,
    pub permission_type: String,
    pub description: Option<String>,
    pub domain_id: Option<i64>,
}

impl PermissionObject {
    pub fn new(id: i64, value: impl Into<String>, permission_type: impl Into<String>) -> Self {
        Self {
            id,
            value: value.into(),
            permission_type: permission_type.into(),
            description: None,
            domain_id: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_domain_id(mut self, domain_id: i64) -> Self {
        self.domain_id = Some(domain_id);
        self
    }
}
