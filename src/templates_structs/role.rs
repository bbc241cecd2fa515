use askama::Template;

use crate::models::confirm::Prompt;
use crate::models::role::{PermissionGroup, Role, RoleDraft};
use super::PageContext;

#[derive(Template)]
#[template(path = "roles/list.html")]
pub struct RoleListTemplate {
    pub ctx: PageContext,
    pub roles: Vec<Role>,
    pub query: String,
    pub prompt: Option<Prompt>,
    pub screen_path: &'static str,
}

#[derive(Template)]
#[template(path = "roles/form.html")]
pub struct RoleFormTemplate {
    pub ctx: PageContext,
    pub form_action: String,
    pub form_title: String,
    pub submit_label: &'static str,
    pub values: RoleDraft,
    pub catalog: Vec<PermissionGroup>,
    pub errors: Vec<String>,
}
