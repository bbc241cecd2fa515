use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::config::Config;
use crate::errors::{AppError, render, see_other};
use crate::handlers::{CsrfOnly, cancel_route, confirm_route, get_field, parse_form_body, request_confirmation};
use crate::models::role::{self, RoleDraft, RoleIntent, RolePatch, RoleStore};
use crate::models::workspace::{Screen, Workspaces};
use crate::session::{self, csrf};
use crate::templates_structs::{PageContext, RoleFormTemplate};
use super::{draft_from, screen};

pub async fn new_form(
    config: web::Data<Config>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, &config, "/roles")?;

    let tmpl = RoleFormTemplate {
        ctx,
        form_action: "/roles".to_string(),
        form_title: "Create New Role".to_string(),
        submit_label: "Create Role",
        values: RoleDraft::default(),
        catalog: role::permission_catalog(),
        errors: vec![],
    };
    render(tmpl)
}

pub async fn create(
    workspaces: web::Data<Workspaces>,
    config: web::Data<Config>,
    session: Session,
    body: String,
) -> Result<HttpResponse, AppError> {
    let params = parse_form_body(&body);
    csrf::validate_csrf(&session, get_field(&params, "csrf_token"))?;
    let ws = session::workspace_id(&session)?;

    let draft = draft_from(&params);
    match workspaces.with(&ws, |d| d.roles.store.add(draft.clone())) {
        Ok(id) => {
            log::info!("role {id} '{}' created with {} permission(s)", draft.name, draft.permissions.len());
            session::set_flash(&session, "Role created successfully");
            Ok(see_other("/roles"))
        }
        Err(e) => {
            let ctx = PageContext::build(&session, &config, "/roles")?;
            let tmpl = RoleFormTemplate {
                ctx,
                form_action: "/roles".to_string(),
                form_title: "Create New Role".to_string(),
                submit_label: "Create Role",
                values: draft,
                catalog: role::permission_catalog(),
                errors: vec![e.message],
            };
            render(tmpl)
        }
    }
}

pub async fn edit_form(
    workspaces: web::Data<Workspaces>,
    config: web::Data<Config>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let ws = session::workspace_id(&session)?;

    let values = workspaces
        .with(&ws, |d| d.roles.store.find(&id).map(RoleDraft::from))
        .ok_or(AppError::NotFound)?;

    let ctx = PageContext::build(&session, &config, "/roles")?;
    let tmpl = RoleFormTemplate {
        ctx,
        form_action: format!("/roles/{id}"),
        form_title: format!("Edit Role: {}", values.name),
        submit_label: "Update Role",
        values,
        catalog: role::permission_catalog(),
        errors: vec![],
    };
    render(tmpl)
}

pub async fn update(
    workspaces: web::Data<Workspaces>,
    config: web::Data<Config>,
    session: Session,
    path: web::Path<String>,
    body: String,
) -> Result<HttpResponse, AppError> {
    let params = parse_form_body(&body);
    csrf::validate_csrf(&session, get_field(&params, "csrf_token"))?;
    let id = path.into_inner();
    let ws = session::workspace_id(&session)?;

    let draft = draft_from(&params);
    let patch = RolePatch::from(draft.clone());
    match workspaces.with(&ws, |d| d.roles.store.update(&id, patch)) {
        Ok(found) => {
            if found {
                log::info!("role {id} updated");
                session::set_flash(&session, "Role updated successfully");
            }
            Ok(see_other("/roles"))
        }
        Err(e) => {
            let ctx = PageContext::build(&session, &config, "/roles")?;
            let tmpl = RoleFormTemplate {
                ctx,
                form_action: format!("/roles/{id}"),
                form_title: "Edit Role".to_string(),
                submit_label: "Update Role",
                values: draft,
                catalog: role::permission_catalog(),
                errors: vec![e.message],
            };
            render(tmpl)
        }
    }
}

pub async fn delete(
    workspaces: web::Data<Workspaces>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let id = path.into_inner();
    request_confirmation(&workspaces, &session, screen, RoleIntent::Delete { id })?;
    Ok(see_other("/roles"))
}

pub async fn confirm(
    workspaces: web::Data<Workspaces>,
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    confirm_route(&workspaces, &session, &form, screen, "/roles")
}

pub async fn cancel(
    workspaces: web::Data<Workspaces>,
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    cancel_route(&workspaces, &session, &form, screen, "/roles")
}

pub async fn reset(
    workspaces: web::Data<Workspaces>,
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let ws = session::workspace_id(&session)?;
    workspaces.with(&ws, |d| d.roles = Screen::new(RoleStore::seeded()));
    session::set_flash(&session, "Roles reset to sample data");
    Ok(see_other("/roles"))
}
