use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::config::Config;
use crate::errors::{AppError, render, see_other};
use crate::handlers::{CsrfOnly, SearchQuery, cancel_route, confirm_route, request_confirmation};
use crate::models::permission::{Added, PermissionDraft, PermissionForm, PermissionIntent, PermissionStore, ToggleForm};
use crate::models::workspace::{Dashboard, PermissionsScreen, Screen, Workspaces};
use crate::session::{self, csrf};
use crate::templates_structs::{PageContext, PermissionFormTemplate, PermissionListTemplate};

fn screen(d: &mut Dashboard) -> &mut PermissionsScreen {
    &mut d.permissions
}

pub async fn list(
    workspaces: web::Data<Workspaces>,
    config: web::Data<Config>,
    session: Session,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse, AppError> {
    let ws = session::workspace_id(&session)?;
    let ctx = PageContext::build(&session, &config, "/permissions")?;

    let term = query.term();
    let (modules, prompt) = workspaces.with(&ws, |d| {
        let modules = d.permissions.store.search(&term).into_iter().cloned().collect();
        (modules, d.permissions.prompt())
    });

    let tmpl = PermissionListTemplate { ctx, modules, query: term, prompt, screen_path: "/permissions" };
    render(tmpl)
}

pub async fn new_form(
    config: web::Data<Config>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, &config, "/permissions")?;
    render(PermissionFormTemplate { ctx, values: PermissionDraft::default(), errors: vec![] })
}

pub async fn create(
    workspaces: web::Data<Workspaces>,
    config: web::Data<Config>,
    session: Session,
    form: web::Form<PermissionForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let ws = session::workspace_id(&session)?;

    let draft = form.draft();
    match workspaces.with(&ws, |d| d.permissions.store.add(draft.clone())) {
        Ok(added) => {
            match &added {
                Added::ToExisting { module_id, action_id } => {
                    log::info!("permission {action_id} added to module {module_id}");
                }
                Added::NewModule { module_id, action_id } => {
                    log::info!("module {module_id} '{}' created with permission {action_id}", draft.module);
                }
            }
            session::set_flash(&session, "Permission added");
            Ok(see_other("/permissions"))
        }
        Err(e) => {
            let ctx = PageContext::build(&session, &config, "/permissions")?;
            render(PermissionFormTemplate { ctx, values: draft, errors: vec![e.message] })
        }
    }
}

/// Ask before flipping an action; applied by `confirm`. The ids travel in
/// the form body since action ids may contain `/`.
pub async fn toggle(
    workspaces: web::Data<Workspaces>,
    session: Session,
    form: web::Form<ToggleForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let ToggleForm { module_id, action_id, .. } = form.into_inner();
    let intent = PermissionIntent::Toggle { module_id, action_id };
    request_confirmation(&workspaces, &session, screen, intent)?;
    Ok(see_other("/permissions"))
}

pub async fn save_roles(
    workspaces: web::Data<Workspaces>,
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    request_confirmation(&workspaces, &session, screen, PermissionIntent::SaveRoles)?;
    Ok(see_other("/permissions"))
}

pub async fn confirm(
    workspaces: web::Data<Workspaces>,
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    confirm_route(&workspaces, &session, &form, screen, "/permissions")
}

pub async fn cancel(
    workspaces: web::Data<Workspaces>,
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    cancel_route(&workspaces, &session, &form, screen, "/permissions")
}

pub async fn reset(
    workspaces: web::Data<Workspaces>,
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let ws = session::workspace_id(&session)?;
    workspaces.with(&ws, |d| d.permissions = Screen::new(PermissionStore::seeded()));
    session::set_flash(&session, "Permissions reset to sample data");
    Ok(see_other("/permissions"))
}
