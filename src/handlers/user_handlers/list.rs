use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::config::Config;
use crate::errors::{AppError, render};
use crate::handlers::SearchQuery;
use crate::models::workspace::Workspaces;
use crate::session;
use crate::templates_structs::{PageContext, UserListTemplate};

pub async fn list(
    workspaces: web::Data<Workspaces>,
    config: web::Data<Config>,
    session: Session,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse, AppError> {
    let ws = session::workspace_id(&session)?;
    let ctx = PageContext::build(&session, &config, "/users")?;

    let term = query.term();
    let (users, prompt) = workspaces.with(&ws, |d| {
        let users = d.users.store.search(&term).into_iter().cloned().collect();
        (users, d.users.prompt())
    });

    let tmpl = UserListTemplate { ctx, users, query: term, prompt, screen_path: "/users" };
    render(tmpl)
}
