use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::models::workspace::Workspaces;
use crate::session;

/// Read-only JSON dump of every store in the caller's workspace.
pub async fn workspace(
    workspaces: web::Data<Workspaces>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ws = session::workspace_id(&session)?;
    let snapshot = workspaces.with(&ws, |d| serde_json::to_value(&*d));
    match snapshot {
        Ok(json) => Ok(HttpResponse::Ok().json(json)),
        Err(e) => {
            log::error!("could not serialize workspace {ws}: {e}");
            Ok(HttpResponse::InternalServerError().finish())
        }
    }
}
