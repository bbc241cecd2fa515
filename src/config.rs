use std::time::Duration;

use actix_web::cookie::Key;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_BANNER_DELAY_MS: u64 = 3000;
const DEFAULT_APP_NAME: &str = "Admin Dashboard";
const DEFAULT_WORKSPACE_IDLE_SECS: u64 = 30 * 60;
const DEFAULT_MAX_WORKSPACES: usize = 1000;

/// Runtime configuration, read from the environment (and `.env` if present).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub session_key: Option<String>,
    pub banner_delay: Duration,
    pub app_name: String,
    /// Workspaces unused for this long are dropped.
    pub workspace_idle: Duration,
    pub max_workspaces: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            session_key: None,
            banner_delay: Duration::from_millis(DEFAULT_BANNER_DELAY_MS),
            app_name: DEFAULT_APP_NAME.to_string(),
            workspace_idle: Duration::from_secs(DEFAULT_WORKSPACE_IDLE_SECS),
            max_workspaces: DEFAULT_MAX_WORKSPACES,
        }
    }
}

fn parse_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("{name}={raw:?} is not valid, using default");
            default
        }),
        Err(_) => default,
    }
}

impl Config {
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            log::debug!("no .env loaded: {e}");
        }
        let defaults = Self::default();
        Self {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: parse_or("PORT", defaults.port),
            session_key: std::env::var("SESSION_KEY").ok(),
            banner_delay: Duration::from_millis(parse_or("BANNER_DELAY_MS", DEFAULT_BANNER_DELAY_MS)),
            app_name: std::env::var("APP_NAME").unwrap_or(defaults.app_name),
            workspace_idle: Duration::from_secs(parse_or("WORKSPACE_IDLE_SECS", DEFAULT_WORKSPACE_IDLE_SECS)),
            max_workspaces: parse_or("MAX_WORKSPACES", defaults.max_workspaces),
        }
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }

    /// Cookie signing key. SESSION_KEY must be at least 64 bytes; otherwise a
    /// random key is generated and sessions are lost on restart.
    pub fn cookie_key(&self) -> Key {
        match &self.session_key {
            Some(val) if val.len() >= 64 => {
                log::info!("Using SESSION_KEY from environment");
                Key::from(val.as_bytes())
            }
            Some(val) => {
                log::warn!("SESSION_KEY too short ({} bytes, need 64+), generating random key", val.len());
                Key::generate()
            }
            None => {
                log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
                Key::generate()
            }
        }
    }
}
