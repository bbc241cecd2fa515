use askama::Template;

use crate::models::setting::{SettingCategory, Settings};
use super::PageContext;

#[derive(Template)]
#[template(path = "settings.html")]
pub struct SettingsTemplate {
    pub ctx: PageContext,
    pub settings: Settings,
    pub tabs: Vec<SettingCategory>,
    pub tab: SettingCategory,
    pub saved: bool,
    pub errors: Vec<String>,
}
