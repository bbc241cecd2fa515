mod crud;
mod list;

pub use crud::*;
pub use list::*;

use crate::handlers::{get_all, get_field};
use crate::models::role::RoleDraft;
use crate::models::workspace::{Dashboard, RolesScreen};

fn screen(d: &mut Dashboard) -> &mut RolesScreen {
    &mut d.roles
}

/// Build a role draft from the submitted form; each ticked box is a
/// repeated `permissions` field.
fn draft_from(params: &[(String, String)]) -> RoleDraft {
    RoleDraft {
        name: get_field(params, "name").trim().to_string(),
        description: get_field(params, "description").trim().to_string(),
        permissions: get_all(params, "permissions")
            .into_iter()
            .map(String::from)
            .collect(),
    }
}
