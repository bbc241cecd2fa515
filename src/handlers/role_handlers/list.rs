use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::config::Config;
use crate::errors::{AppError, render};
use crate::handlers::SearchQuery;
use crate::models::workspace::Workspaces;
use crate::session;
use crate::templates_structs::{PageContext, RoleListTemplate};

/// Roles table, narrowed by `?q=` over name and description.
pub async fn list(
    workspaces: web::Data<Workspaces>,
    config: web::Data<Config>,
    session: Session,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse, AppError> {
    let ws = session::workspace_id(&session)?;
    let ctx = PageContext::build(&session, &config, "/roles")?;

    let term = query.term();
    let (roles, prompt) = workspaces.with(&ws, |d| {
        let roles = d.roles.store.search(&term).into_iter().cloned().collect();
        (roles, d.roles.prompt())
    });

    let tmpl = RoleListTemplate { ctx, roles, query: term, prompt, screen_path: "/roles" };
    render(tmpl)
}
