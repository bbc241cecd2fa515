mod crud;
mod list;

pub use crud::*;
pub use list::*;

use crate::models::workspace::{Dashboard, UsersScreen};

fn screen(d: &mut Dashboard) -> &mut UsersScreen {
    &mut d.users
}
