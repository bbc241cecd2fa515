use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::config::Config;
use crate::errors::{AppError, render, see_other};
use crate::handlers::{CsrfOnly, cancel_route, confirm_route, request_confirmation};
use crate::models::user::{RoleOption, UserDraft, UserForm, UserIntent, UserStore};
use crate::models::workspace::{Screen, Workspaces};
use crate::session::{self, csrf};
use crate::templates_structs::{PageContext, UserFormTemplate};
use super::screen;

fn role_options(workspaces: &Workspaces, ws: &str) -> Vec<RoleOption> {
    workspaces.with(ws, |d| d.users.store.role_options().to_vec())
}

pub async fn new_form(
    workspaces: web::Data<Workspaces>,
    config: web::Data<Config>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ws = session::workspace_id(&session)?;
    let ctx = PageContext::build(&session, &config, "/users")?;

    let tmpl = UserFormTemplate {
        ctx,
        form_action: "/users".to_string(),
        form_title: "Add New User".to_string(),
        submit_label: "Add User",
        values: UserDraft::default(),
        role_options: role_options(&workspaces, &ws),
        errors: vec![],
    };
    render(tmpl)
}

pub async fn create(
    workspaces: web::Data<Workspaces>,
    config: web::Data<Config>,
    session: Session,
    form: web::Form<UserForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let ws = session::workspace_id(&session)?;

    let draft = form.draft();
    match workspaces.with(&ws, |d| d.users.store.add(draft.clone())) {
        Ok(id) => {
            log::info!("user {id} '{}' created", draft.username);
            session::set_flash(&session, "User created successfully");
            Ok(see_other("/users"))
        }
        Err(e) => {
            let ctx = PageContext::build(&session, &config, "/users")?;
            let tmpl = UserFormTemplate {
                ctx,
                form_action: "/users".to_string(),
                form_title: "Add New User".to_string(),
                submit_label: "Add User",
                values: draft,
                role_options: role_options(&workspaces, &ws),
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
        .with(&ws, |d| d.users.store.find(&id).map(UserDraft::from))
        .ok_or(AppError::NotFound)?;

    let ctx = PageContext::build(&session, &config, "/users")?;
    let tmpl = UserFormTemplate {
        ctx,
        form_action: format!("/users/{id}"),
        form_title: format!("Edit User: {}", values.username),
        submit_label: "Update User",
        values,
        role_options: role_options(&workspaces, &ws),
        errors: vec![],
    };
    render(tmpl)
}

pub async fn update(
    workspaces: web::Data<Workspaces>,
    config: web::Data<Config>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<UserForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let id = path.into_inner();
    let ws = session::workspace_id(&session)?;

    match workspaces.with(&ws, |d| d.users.store.update(&id, form.patch())) {
        Ok(found) => {
            if found {
                log::info!("user {id} updated");
                session::set_flash(&session, "User updated successfully");
            }
            Ok(see_other("/users"))
        }
        Err(e) => {
            let ctx = PageContext::build(&session, &config, "/users")?;
            let tmpl = UserFormTemplate {
                ctx,
                form_action: format!("/users/{id}"),
                form_title: "Edit User".to_string(),
                submit_label: "Update User",
                values: form.draft(),
                role_options: role_options(&workspaces, &ws),
                errors: vec![e.message],
            };
            render(tmpl)
        }
    }
}

/// Ask for confirmation before deleting; the list page shows the dialog.
pub async fn delete(
    workspaces: web::Data<Workspaces>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let id = path.into_inner();
    request_confirmation(&workspaces, &session, screen, UserIntent::Delete { id })?;
    Ok(see_other("/users"))
}

pub async fn confirm(
    workspaces: web::Data<Workspaces>,
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    confirm_route(&workspaces, &session, &form, screen, "/users")
}

pub async fn cancel(
    workspaces: web::Data<Workspaces>,
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    cancel_route(&workspaces, &session, &form, screen, "/users")
}

/// Throw the screen away and start again from the seed data.
pub async fn reset(
    workspaces: web::Data<Workspaces>,
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let ws = session::workspace_id(&session)?;
    workspaces.with(&ws, |d| d.users = Screen::new(UserStore::seeded()));
    session::set_flash(&session, "Users reset to sample data");
    Ok(see_other("/users"))
}
