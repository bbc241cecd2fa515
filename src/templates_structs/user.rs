use askama::Template;

use crate::models::confirm::Prompt;
use crate::models::user::{RoleOption, User, UserDraft};
use super::PageContext;

#[derive(Template)]
#[template(path = "users/list.html")]
pub struct UserListTemplate {
    pub ctx: PageContext,
    pub users: Vec<User>,
    pub query: String,
    pub prompt: Option<Prompt>,
    pub screen_path: &'static str,
}

#[derive(Template)]
#[template(path = "users/form.html")]
pub struct UserFormTemplate {
    pub ctx: PageContext,
    pub form_action: String,
    pub form_title: String,
    pub submit_label: &'static str,
    pub values: UserDraft,
    pub role_options: Vec<RoleOption>,
    pub errors: Vec<String>,
}
