use serde::Serialize;

use crate::errors::ValidationError;
use crate::models::confirm::{Intent, Prompt};
use crate::models::filter::{self, Searchable};
use crate::models::store::{Record, Store};
use crate::validate;

/// A role with its own copy of the permission ids it grants.
/// `user_count` is a display counter, never recomputed from the users list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: String,
    pub name: String,
    pub description: String,
    pub permissions: Vec<String>,
    pub user_count: u32,
}

impl Role {
    pub fn has_permission(&self, code: &str) -> bool {
        self.permissions.iter().any(|p| p == code)
    }
}

impl Record for Role {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for Role {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }
}

/// Input of the create-role form.
#[derive(Debug, Clone, Default)]
pub struct RoleDraft {
    pub name: String,
    pub description: String,
    pub permissions: Vec<String>,
}

impl RoleDraft {
    /// Whether the permission checkbox `code` is ticked.
    pub fn includes(&self, code: &str) -> bool {
        self.permissions.iter().any(|p| p == code)
    }
}

impl From<&Role> for RoleDraft {
    fn from(r: &Role) -> Self {
        Self {
            name: r.name.clone(),
            description: r.description.clone(),
            permissions: r.permissions.clone(),
        }
    }
}

/// Fields to shallow-merge onto an existing role.
#[derive(Debug, Clone, Default)]
pub struct RolePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub permissions: Option<Vec<String>>,
}

impl From<RoleDraft> for RolePatch {
    fn from(d: RoleDraft) -> Self {
        Self {
            name: Some(d.name),
            description: Some(d.description),
            permissions: Some(d.permissions),
        }
    }
}

/// One checkbox of the role form's permission list.
#[derive(Debug, Clone, PartialEq)]
pub struct PermissionInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// Permissions offered on the role form, grouped by module.
pub struct PermissionGroup {
    pub module: &'static str,
    pub permissions: Vec<PermissionInfo>,
}

/// Fixed permission catalog shown on the role form.
pub fn permission_catalog() -> Vec<PermissionGroup> {
    let info = |id, name, description| PermissionInfo { id, name, description };
    vec![
        PermissionGroup {
            module: "Users",
            permissions: vec![
                info("users.create", "Create Users", "Can create new users"),
                info("users.read", "View Users", "Can view user details"),
                info("users.update", "Update Users", "Can modify user information"),
                info("users.delete", "Delete Users", "Can remove users from the system"),
            ],
        },
        PermissionGroup {
            module: "Roles",
            permissions: vec![
                info("roles.create", "Create Roles", "Can create new roles"),
                info("roles.read", "View Roles", "Can view role details"),
                info("roles.update", "Update Roles", "Can modify role settings"),
                info("roles.delete", "Delete Roles", "Can delete roles"),
            ],
        },
        PermissionGroup {
            module: "Settings",
            permissions: vec![
                info("settings.read", "View Settings", "Can view system settings"),
                info("settings.update", "Update Settings", "Can modify system settings"),
            ],
        },
    ]
}

fn validate_role(name: &str) -> Result<(), ValidationError> {
    validate::require(name, "Role name")
}

/// Roles screen store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RoleStore {
    roles: Store<Role>,
}

impl RoleStore {
    pub fn new(roles: Vec<Role>) -> Self {
        Self { roles: Store::new(roles) }
    }

    pub fn seeded() -> Self {
        Self::new(seed_roles())
    }

    pub fn roles(&self) -> &[Role] {
        self.roles.records()
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Role> {
        self.roles.find(id)
    }

    /// Roles whose name or description contains `term`, ignoring case.
    pub fn search(&self, term: &str) -> Vec<&Role> {
        filter::filter(self.roles.records(), term)
    }

    pub fn add(&mut self, draft: RoleDraft) -> Result<String, ValidationError> {
        validate_role(&draft.name)?;

        let id = self.roles.next_id();
        self.roles.push(Role {
            id: id.clone(),
            name: draft.name,
            description: draft.description,
            permissions: draft.permissions,
            user_count: 0,
        });
        Ok(id)
    }

    pub fn delete(&mut self, id: &str) -> bool {
        self.roles.delete(id)
    }

    pub fn update(&mut self, id: &str, patch: RolePatch) -> Result<bool, ValidationError> {
        if let Some(name) = &patch.name {
            validate_role(name)?;
        }
        let Some(role) = self.roles.find_mut(id) else {
            return Ok(false);
        };
        if let Some(v) = patch.name { role.name = v; }
        if let Some(v) = patch.description { role.description = v; }
        if let Some(v) = patch.permissions { role.permissions = v; }
        Ok(true)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleIntent {
    Delete { id: String },
}

impl Intent for RoleIntent {
    fn prompt(&self) -> Prompt {
        match self {
            RoleIntent::Delete { .. } => Prompt {
                title: "Delete role",
                message: "Are you sure you want to delete this role?",
                confirm_label: "Delete",
            },
        }
    }
}

fn codes(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

pub fn seed_roles() -> Vec<Role> {
    vec![
        Role {
            id: "1".into(),
            name: "Administrator".into(),
            description: "Full system access".into(),
            permissions: codes(&[
                "users.create", "users.read", "users.update", "users.delete",
                "roles.create", "roles.read", "roles.update", "roles.delete",
            ]),
            user_count: 3,
        },
        Role {
            id: "2".into(),
            name: "Editor".into(),
            description: "Can manage content and basic user operations".into(),
            permissions: codes(&["users.read", "users.update", "roles.read"]),
            user_count: 5,
        },
        Role {
            id: "3".into(),
            name: "Viewer".into(),
            description: "Read-only access to the system".into(),
            permissions: codes(&["users.read", "roles.read"]),
            user_count: 10,
        },
    ]
}
