use askama::Template;

use crate::models::confirm::Prompt;
use crate::models::permission::{PermissionDraft, PermissionModule};
use super::PageContext;

#[derive(Template)]
#[template(path = "permissions/list.html")]
pub struct PermissionListTemplate {
    pub ctx: PageContext,
    pub modules: Vec<PermissionModule>,
    pub query: String,
    pub prompt: Option<Prompt>,
    pub screen_path: &'static str,
}

#[derive(Template)]
#[template(path = "permissions/form.html")]
pub struct PermissionFormTemplate {
    pub ctx: PageContext,
    pub values: PermissionDraft,
    pub errors: Vec<String>,
}
