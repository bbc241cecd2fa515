pub mod csrf;

use actix_session::Session;

use crate::errors::AppError;

const WORKSPACE_KEY: &str = "workspace_id";
const FLASH_KEY: &str = "flash";

/// Id of this browser's workspace, created on the first request.
pub fn workspace_id(session: &Session) -> Result<String, AppError> {
    if let Ok(Some(id)) = session.get::<String>(WORKSPACE_KEY) {
        return Ok(id);
    }
    let id = csrf::generate_token();
    session
        .insert(WORKSPACE_KEY, &id)
        .map_err(|e| AppError::Session(e.to_string()))?;
    log::info!("new workspace {id}");
    Ok(id)
}

pub fn set_flash(session: &Session, msg: impl Into<String>) {
    if let Err(e) = session.insert(FLASH_KEY, msg.into()) {
        log::warn!("could not store flash message: {e}");
    }
}

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>(FLASH_KEY).unwrap_or(None);
    if flash.is_some() {
        session.remove(FLASH_KEY);
    }
    flash
}
