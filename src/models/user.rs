use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::ValidationError;
use crate::models::confirm::{Intent, Prompt};
use crate::models::filter::{self, Searchable};
use crate::models::store::{Record, Store};
use crate::validate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dashboard user. `role` is the role's display name copied when the
/// record was written; it is not kept in sync with any role list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub status: UserStatus,
    pub role_id: String,
    pub role: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}

impl Record for User {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.username.as_str(),
            self.email.as_str(),
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.role.as_str(),
        ]
    }
}

/// Entry of the role dropdown on the user form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleOption {
    pub id: String,
    pub name: String,
}

/// Input collected by the add-user form.
#[derive(Debug, Clone, Default)]
pub struct UserDraft {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role_id: String,
    pub status: UserStatus,
}

impl From<&User> for UserDraft {
    fn from(u: &User) -> Self {
        Self {
            username: u.username.clone(),
            email: u.email.clone(),
            first_name: u.first_name.clone(),
            last_name: u.last_name.clone(),
            role_id: u.role_id.clone(),
            status: u.status,
        }
    }
}

/// Fields to shallow-merge onto an existing user. `None` keeps the old value.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role_id: Option<String>,
    pub status: Option<UserStatus>,
}

/// Form data from the add/edit user forms.
#[derive(Debug, Deserialize)]
pub struct UserForm {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub role_id: String,
    #[serde(default)]
    pub status: UserStatus,
    pub csrf_token: String,
}

impl UserForm {
    pub fn draft(&self) -> UserDraft {
        UserDraft {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            role_id: self.role_id.trim().to_string(),
            status: self.status,
        }
    }

    /// The edit form submits every field, so every field is patched.
    pub fn patch(&self) -> UserPatch {
        let d = self.draft();
        UserPatch {
            username: Some(d.username),
            email: Some(d.email),
            first_name: Some(d.first_name),
            last_name: Some(d.last_name),
            role_id: Some(d.role_id),
            status: Some(d.status),
        }
    }
}

fn validate_user(username: &str, email: &str, role_id: &str) -> Result<(), ValidationError> {
    validate::require_all(&[username, email, role_id], validate::FILL_REQUIRED)
}

/// Users screen store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct UserStore {
    users: Store<User>,
    #[serde(skip)]
    role_options: Vec<RoleOption>,
}

impl UserStore {
    pub fn new(users: Vec<User>, role_options: Vec<RoleOption>) -> Self {
        Self { users: Store::new(users), role_options }
    }

    pub fn seeded() -> Self {
        Self::new(seed_users(), seed_role_options())
    }

    pub fn users(&self) -> &[User] {
        self.users.records()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn role_options(&self) -> &[RoleOption] {
        &self.role_options
    }

    pub fn find(&self, id: &str) -> Option<&User> {
        self.users.find(id)
    }

    pub fn search(&self, term: &str) -> Vec<&User> {
        filter::filter(self.users.records(), term)
    }

    /// Name of the role option with `role_id`, empty when unknown.
    fn role_name(&self, role_id: &str) -> String {
        self.role_options
            .iter()
            .find(|r| r.id == role_id)
            .map(|r| r.name.clone())
            .unwrap_or_default()
    }

    /// Append a new user and return its id.
    pub fn add(&mut self, draft: UserDraft) -> Result<String, ValidationError> {
        validate_user(&draft.username, &draft.email, &draft.role_id)?;

        let id = self.users.next_id();
        let role = self.role_name(&draft.role_id);
        self.users.push(User {
            id: id.clone(),
            username: draft.username,
            email: draft.email,
            first_name: draft.first_name,
            last_name: draft.last_name,
            status: draft.status,
            role_id: draft.role_id,
            role,
        });
        Ok(id)
    }

    pub fn delete(&mut self, id: &str) -> bool {
        self.users.delete(id)
    }

    /// Merge `patch` onto user `id`. `Ok(false)` when there is no such user.
    /// A changed role id re-copies the role name.
    pub fn update(&mut self, id: &str, patch: UserPatch) -> Result<bool, ValidationError> {
        let Some(current) = self.users.find(id) else {
            return Ok(false);
        };

        let mut next = current.clone();
        if let Some(v) = patch.username { next.username = v; }
        if let Some(v) = patch.email { next.email = v; }
        if let Some(v) = patch.first_name { next.first_name = v; }
        if let Some(v) = patch.last_name { next.last_name = v; }
        if let Some(v) = patch.status { next.status = v; }
        if let Some(v) = patch.role_id {
            if v != next.role_id {
                next.role = self.role_name(&v);
            }
            next.role_id = v;
        }
        validate_user(&next.username, &next.email, &next.role_id)?;

        if let Some(slot) = self.users.find_mut(id) {
            *slot = next;
        }
        Ok(true)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserIntent {
    Delete { id: String },
}

impl Intent for UserIntent {
    fn prompt(&self) -> Prompt {
        match self {
            UserIntent::Delete { .. } => Prompt {
                title: "Delete user",
                message: "Are you sure you want to delete this user?",
                confirm_label: "Delete",
            },
        }
    }
}

fn seed_user(id: &str, name: &str, status: UserStatus, role: &str) -> User {
    let mut first_name = name.to_string();
    if let Some(first) = first_name.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    User {
        id: id.to_string(),
        username: name.to_string(),
        email: format!("{name}@example.com"),
        first_name,
        last_name: "User".to_string(),
        status,
        role_id: id.to_string(),
        role: role.to_string(),
    }
}

pub fn seed_users() -> Vec<User> {
    vec![
        seed_user("1", "admin", UserStatus::Active, "Administrator"),
        seed_user("2", "editor", UserStatus::Active, "Editor"),
        seed_user("3", "viewer", UserStatus::Inactive, "Viewer"),
    ]
}

pub fn seed_role_options() -> Vec<RoleOption> {
    [("1", "Administrator"), ("2", "Editor"), ("3", "Viewer")]
        .into_iter()
        .map(|(id, name)| RoleOption { id: id.to_string(), name: name.to_string() })
        .collect()
}
