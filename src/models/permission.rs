use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::models::confirm::{Intent, Prompt};
use crate::models::filter::{self, Searchable};
use crate::models::store::{Record, Store};
use crate::validate;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PermissionAction {
    pub id: String,
    pub name: String,
    pub enabled: bool,
}

/// A group of permission actions, e.g. "Users" with create/read/update/delete.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PermissionModule {
    pub id: String,
    pub module: String,
    pub actions: Vec<PermissionAction>,
}

impl Record for PermissionModule {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for PermissionModule {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.module.as_str()];
        for a in &self.actions {
            fields.push(&a.id);
            fields.push(&a.name);
        }
        fields
    }
}

/// Derive an action id from its display name: lower-cased, each run of
/// whitespace collapsed to a single `.` ("Archive Users" -> "archive.users").
/// Callers pass the already trimmed name, so stored ids never start or end
/// with `.`; an untrimmed name keeps its edge whitespace as dots.
pub fn action_id(name: &str) -> String {
    let mut id = String::with_capacity(name.len());
    let mut in_space = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_space {
                id.push('.');
            }
            in_space = true;
        } else {
            id.extend(c.to_lowercase());
            in_space = false;
        }
    }
    id
}

/// Form data from the add-permission form.
#[derive(Debug, Deserialize)]
pub struct PermissionForm {
    pub module: String,
    pub action_name: String,
    pub csrf_token: String,
}

/// Hidden fields of one toggle switch on the permissions page.
#[derive(Debug, Deserialize)]
pub struct ToggleForm {
    pub module_id: String,
    pub action_id: String,
    pub csrf_token: String,
}

#[derive(Debug, Clone, Default)]
pub struct PermissionDraft {
    pub module: String,
    pub action_name: String,
}

impl PermissionForm {
    pub fn draft(&self) -> PermissionDraft {
        PermissionDraft {
            module: self.module.trim().to_string(),
            action_name: self.action_name.trim().to_string(),
        }
    }
}

/// Where [`PermissionStore::add`] put the new action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Added {
    ToExisting { module_id: String, action_id: String },
    NewModule { module_id: String, action_id: String },
}

/// Permissions screen store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PermissionStore {
    modules: Store<PermissionModule>,
}

impl PermissionStore {
    pub fn new(modules: Vec<PermissionModule>) -> Self {
        Self { modules: Store::new(modules) }
    }

    pub fn seeded() -> Self {
        Self::new(seed_modules())
    }

    pub fn modules(&self) -> &[PermissionModule] {
        self.modules.records()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn find(&self, module_id: &str) -> Option<&PermissionModule> {
        self.modules.find(module_id)
    }

    pub fn find_action(&self, module_id: &str, action_id: &str) -> Option<&PermissionAction> {
        self.find(module_id)?.actions.iter().find(|a| a.id == action_id)
    }

    pub fn search(&self, term: &str) -> Vec<&PermissionModule> {
        filter::filter(self.modules.records(), term)
    }

    /// Add an enabled action. It joins the module whose name matches exactly,
    /// otherwise a new module is created for it. Existing action ids are not
    /// checked, so a repeated name yields a second action with the same id.
    pub fn add(&mut self, draft: PermissionDraft) -> Result<Added, ValidationError> {
        validate::require_all(&[&draft.module, &draft.action_name], validate::FILL_REQUIRED)?;

        let action = PermissionAction {
            id: action_id(&draft.action_name),
            name: draft.action_name,
            enabled: true,
        };
        let action_id = action.id.clone();

        if let Some(module) = self.modules.find_mut_by(|m| m.module == draft.module) {
            module.actions.push(action);
            let module_id = module.id.clone();
            return Ok(Added::ToExisting { module_id, action_id });
        }

        let module_id = self.modules.next_id();
        self.modules.push(PermissionModule {
            id: module_id.clone(),
            module: draft.module,
            actions: vec![action],
        });
        Ok(Added::NewModule { module_id, action_id })
    }

    /// Flip `enabled` on every action with `action_id` in module `module_id`.
    /// Returns false when nothing matched.
    pub fn toggle(&mut self, module_id: &str, action_id: &str) -> bool {
        let Some(module) = self.modules.find_mut(module_id) else {
            return false;
        };
        let mut hit = false;
        for action in module.actions.iter_mut().filter(|a| a.id == action_id) {
            action.enabled = !action.enabled;
            hit = true;
        }
        hit
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionIntent {
    Toggle { module_id: String, action_id: String },
    SaveRoles,
}

impl Intent for PermissionIntent {
    fn prompt(&self) -> Prompt {
        match self {
            PermissionIntent::Toggle { .. } => Prompt {
                title: "Are you sure?",
                message: "Do you want to toggle this permission?",
                confirm_label: "Confirm",
            },
            PermissionIntent::SaveRoles => Prompt {
                title: "Do you want to save changes?",
                message: "Do you want to save the changes you made to the roles?",
                confirm_label: "Save Changes",
            },
        }
    }
}

fn seed_module(id: &str, module: &str, actions: &[(&str, &str)]) -> PermissionModule {
    PermissionModule {
        id: id.to_string(),
        module: module.to_string(),
        actions: actions
            .iter()
            .map(|(id, name)| PermissionAction {
                id: id.to_string(),
                name: name.to_string(),
                enabled: true,
            })
            .collect(),
    }
}

pub fn seed_modules() -> Vec<PermissionModule> {
    vec![
        seed_module("1", "Users", &[
            ("users.create", "Create Users"),
            ("users.read", "View Users"),
            ("users.update", "Update Users"),
            ("users.delete", "Delete Users"),
        ]),
        seed_module("2", "Roles", &[
            ("roles.create", "Create Roles"),
            ("roles.read", "View Roles"),
            ("roles.update", "Update Roles"),
            ("roles.delete", "Delete Roles"),
        ]),
        seed_module("3", "Settings", &[
            ("settings.read", "View Settings"),
            ("settings.update", "Update Settings"),
        ]),
    ]
}
