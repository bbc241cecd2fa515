// Template context structures for Askama templates, organized by screen.
// All types are re-exported: `use rbac_dash::templates_structs::*`

use actix_session::Session;

use crate::config::Config;
use crate::errors::AppError;
use crate::session::{self, csrf};

mod common;
mod permission;
mod role;
mod user;

pub use common::*;
pub use permission::*;
pub use role::*;
pub use user::*;

/// Sidebar entry.
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

const NAV: [(&str, &str, &str); 4] = [
    ("/users", "Users", "fa-users"),
    ("/roles", "Roles", "fa-user-shield"),
    ("/permissions", "Permissions", "fa-key"),
    ("/settings", "Settings", "fa-cog"),
];

/// Common context shared by all pages.
/// Templates access these as `ctx.flash`, `ctx.csrf_token`, etc.
pub struct PageContext {
    pub app_name: String,
    pub flash: Option<String>,
    pub csrf_token: String,
    pub nav: Vec<NavItem>,
}

impl PageContext {
    pub fn build(session: &Session, config: &Config, current_path: &str) -> Result<Self, AppError> {
        let flash = session::take_flash(session);
        let csrf_token = csrf::get_or_create_token(session)?;
        let nav = NAV
            .iter()
            .map(|&(path, label, icon)| NavItem { path, label, icon, active: path == current_path })
            .collect();
        Ok(Self { app_name: config.app_name.clone(), flash, csrf_token, nav })
    }
}
