use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::config::Config;
use crate::errors::{AppError, ValidationError, render, see_other};
use crate::handlers::CsrfOnly;
use crate::models::setting::{SettingCategory, SettingsFields, SettingsStore};
use crate::models::workspace::Workspaces;
use crate::session::{self, csrf};
use crate::templates_structs::{PageContext, SettingsTemplate};

#[derive(Debug, Default, Deserialize)]
pub struct TabQuery {
    pub tab: Option<String>,
}

fn page(
    workspaces: &Workspaces,
    config: &Config,
    session: &Session,
    tab: SettingCategory,
    errors: Vec<String>,
) -> Result<HttpResponse, AppError> {
    let ws = session::workspace_id(session)?;
    let ctx = PageContext::build(session, config, "/settings")?;
    let (settings, saved) = workspaces.with(&ws, |d| {
        (d.settings.settings().clone(), d.settings.banner().is_visible())
    });

    let tmpl = SettingsTemplate {
        ctx,
        settings,
        tabs: SettingCategory::ALL.to_vec(),
        tab,
        saved,
        errors,
    };
    render(tmpl)
}

pub async fn list(
    workspaces: web::Data<Workspaces>,
    config: web::Data<Config>,
    session: Session,
    query: web::Query<TabQuery>,
) -> Result<HttpResponse, AppError> {
    let tab = query
        .tab
        .as_deref()
        .and_then(SettingCategory::parse)
        .unwrap_or(SettingCategory::General);
    page(&workspaces, &config, &session, tab, vec![])
}

/// Save one tab. Each field is submitted under its own name; unchecked
/// checkboxes are absent.
pub async fn save(
    workspaces: web::Data<Workspaces>,
    config: web::Data<Config>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<SettingsFields>,
) -> Result<HttpResponse, AppError> {
    let mut fields = form.into_inner();
    let token = fields.remove("csrf_token").unwrap_or_default();
    csrf::validate_csrf(&session, &token)?;

    let category = SettingCategory::parse(&path).ok_or(AppError::NotFound)?;
    let ws = session::workspace_id(&session)?;

    let result = workspaces.with(&ws, |d| -> Result<(), ValidationError> {
        d.settings.update(category, &fields)?;
        d.settings.banner().show(config.banner_delay);
        Ok(())
    });

    match result {
        Ok(()) => {
            log::info!("{} settings saved", category.as_str());
            Ok(see_other(&format!("/settings?tab={}", category.as_str())))
        }
        Err(e) => page(&workspaces, &config, &session, category, vec![e.message]),
    }
}

pub async fn reset(
    workspaces: web::Data<Workspaces>,
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let ws = session::workspace_id(&session)?;
    workspaces.with(&ws, |d| d.settings = SettingsStore::seeded());
    session::set_flash(&session, "Settings reset to defaults");
    Ok(see_other("/settings"))
}
