pub mod api_handlers;
pub mod permission_handlers;
pub mod role_handlers;
pub mod settings_handlers;
pub mod user_handlers;

use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use std::fmt::Debug;

use crate::errors::{AppError, see_other};
use crate::models::confirm::Intent;
use crate::models::workspace::{Applied, Dashboard, Gateway, Screen, Workspaces};
use crate::session::{self, csrf};

/// Form with nothing but the CSRF token (delete, confirm, cancel, reset).
#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

/// `?q=` on list pages.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

impl SearchQuery {
    pub fn term(&self) -> String {
        self.q.as_deref().unwrap_or("").trim().to_string()
    }
}

/// Selects one screen of a dashboard.
pub type Pick<S, I> = fn(&mut Dashboard) -> &mut Screen<S, I>;

/// Park `intent` on the picked screen; a busy gate becomes a flash message.
pub fn request_confirmation<S, I>(
    workspaces: &Workspaces,
    session: &Session,
    pick: Pick<S, I>,
    intent: I,
) -> Result<(), AppError>
where
    S: Gateway<I>,
    I: Intent + Debug,
{
    let ws = session::workspace_id(session)?;
    if let Err(busy) = workspaces.with(&ws, |d| pick(d).request(intent)) {
        session::set_flash(session, busy.to_string());
    }
    Ok(())
}

/// Apply the picked screen's pending intent, flashing what it did.
pub fn confirm_pending<S, I>(
    workspaces: &Workspaces,
    session: &Session,
    pick: Pick<S, I>,
) -> Result<(), AppError>
where
    S: Gateway<I>,
    I: Intent + Debug,
{
    let ws = session::workspace_id(session)?;
    if let Some(Applied::Done(msg)) = workspaces.with(&ws, |d| pick(d).confirm()) {
        session::set_flash(session, msg);
    }
    Ok(())
}

pub fn cancel_pending<S, I>(
    workspaces: &Workspaces,
    session: &Session,
    pick: Pick<S, I>,
) -> Result<(), AppError>
where
    S: Gateway<I>,
    I: Intent + Debug,
{
    let ws = session::workspace_id(session)?;
    if workspaces.with(&ws, |d| pick(d).cancel()) {
        log::debug!("pending change cancelled in workspace {ws}");
    }
    Ok(())
}

/// POST handler body shared by every `/<screen>/confirm` route.
pub fn confirm_route<S, I>(
    workspaces: &Workspaces,
    session: &Session,
    form: &CsrfOnly,
    pick: Pick<S, I>,
    back_to: &str,
) -> Result<HttpResponse, AppError>
where
    S: Gateway<I>,
    I: Intent + Debug,
{
    csrf::validate_csrf(session, &form.csrf_token)?;
    confirm_pending(workspaces, session, pick)?;
    Ok(see_other(back_to))
}

/// POST handler body shared by every `/<screen>/cancel` route.
pub fn cancel_route<S, I>(
    workspaces: &Workspaces,
    session: &Session,
    form: &CsrfOnly,
    pick: Pick<S, I>,
    back_to: &str,
) -> Result<HttpResponse, AppError>
where
    S: Gateway<I>,
    I: Intent + Debug,
{
    csrf::validate_csrf(session, &form.csrf_token)?;
    cancel_pending(workspaces, session, pick)?;
    Ok(see_other(back_to))
}

/// Parse a URL-encoded body into key-value pairs, keeping repeated keys.
pub fn parse_form_body(body: &str) -> Vec<(String, String)> {
    serde_urlencoded::from_str(body).unwrap_or_default()
}

pub fn get_field<'a>(params: &'a [(String, String)], key: &str) -> &'a str {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .unwrap_or("")
}

pub fn get_all<'a>(params: &'a [(String, String)], key: &str) -> Vec<&'a str> {
    params
        .iter()
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .collect()
}

/// Register every route. `/x/new` and the fixed `/x/confirm` style paths are
/// registered before `/x/{id}` so they are not captured as ids.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(|| async { see_other("/users") }))
        // Users
        .route("/users", web::get().to(user_handlers::list))
        .route("/users/new", web::get().to(user_handlers::new_form))
        .route("/users", web::post().to(user_handlers::create))
        .route("/users/confirm", web::post().to(user_handlers::confirm))
        .route("/users/cancel", web::post().to(user_handlers::cancel))
        .route("/users/reset", web::post().to(user_handlers::reset))
        .route("/users/{id}/edit", web::get().to(user_handlers::edit_form))
        .route("/users/{id}", web::post().to(user_handlers::update))
        .route("/users/{id}/delete", web::post().to(user_handlers::delete))
        // Roles
        .route("/roles", web::get().to(role_handlers::list))
        .route("/roles/new", web::get().to(role_handlers::new_form))
        .route("/roles", web::post().to(role_handlers::create))
        .route("/roles/confirm", web::post().to(role_handlers::confirm))
        .route("/roles/cancel", web::post().to(role_handlers::cancel))
        .route("/roles/reset", web::post().to(role_handlers::reset))
        .route("/roles/{id}/edit", web::get().to(role_handlers::edit_form))
        .route("/roles/{id}", web::post().to(role_handlers::update))
        .route("/roles/{id}/delete", web::post().to(role_handlers::delete))
        // Permissions
        .route("/permissions", web::get().to(permission_handlers::list))
        .route("/permissions/new", web::get().to(permission_handlers::new_form))
        .route("/permissions", web::post().to(permission_handlers::create))
        .route("/permissions/toggle", web::post().to(permission_handlers::toggle))
        .route("/permissions/save", web::post().to(permission_handlers::save_roles))
        .route("/permissions/confirm", web::post().to(permission_handlers::confirm))
        .route("/permissions/cancel", web::post().to(permission_handlers::cancel))
        .route("/permissions/reset", web::post().to(permission_handlers::reset))
        // Settings
        .route("/settings", web::get().to(settings_handlers::list))
        .route("/settings/reset", web::post().to(settings_handlers::reset))
        .route("/settings/{category}", web::post().to(settings_handlers::save))
        // JSON snapshot
        .route("/api/workspace", web::get().to(api_handlers::workspace));
}

/// Fallback for unknown paths.
pub async fn not_found() -> HttpResponse {
    let html = include_str!("../../templates/errors/404.html");
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_form_body_keeps_repeated_keys() {
        let params = parse_form_body("name=Ops+Team&permissions=users.read&permissions=roles.read");
        assert_eq!(get_field(&params, "name"), "Ops Team");
        assert_eq!(get_all(&params, "permissions"), ["users.read", "roles.read"]);
        assert_eq!(get_field(&params, "missing"), "");
    }

    #[test]
    fn search_term_is_trimmed() {
        let q = SearchQuery { q: Some("  edit ".into()) };
        assert_eq!(q.term(), "edit");
        assert_eq!(SearchQuery::default().term(), "");
    }
}
