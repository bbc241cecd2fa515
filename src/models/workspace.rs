use serde::Serialize;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::models::confirm::{ConfirmationGate, GateBusy, Intent, Prompt};
use crate::models::permission::{PermissionIntent, PermissionStore};
use crate::models::role::{RoleIntent, RoleStore};
use crate::models::setting::SettingsStore;
use crate::models::user::{UserIntent, UserStore};

/// Result of applying a confirmed intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// The store changed (or the action ran); the message is flashed.
    Done(String),
    /// The intent's target no longer exists. Nothing is reported.
    Missed,
}

/// A store that knows how to carry out its screen's confirmed intents.
pub trait Gateway<I> {
    fn apply(&mut self, intent: I) -> Applied;
}

impl Gateway<UserIntent> for UserStore {
    fn apply(&mut self, intent: UserIntent) -> Applied {
        match intent {
            UserIntent::Delete { id } => {
                if self.delete(&id) {
                    log::info!("user {id} deleted");
                    Applied::Done("User deleted".into())
                } else {
                    Applied::Missed
                }
            }
        }
    }
}

impl Gateway<RoleIntent> for RoleStore {
    fn apply(&mut self, intent: RoleIntent) -> Applied {
        match intent {
            RoleIntent::Delete { id } => {
                if self.delete(&id) {
                    log::info!("role {id} deleted");
                    Applied::Done("Role deleted".into())
                } else {
                    Applied::Missed
                }
            }
        }
    }
}

impl Gateway<PermissionIntent> for PermissionStore {
    fn apply(&mut self, intent: PermissionIntent) -> Applied {
        match intent {
            PermissionIntent::Toggle { module_id, action_id } => {
                if !self.toggle(&module_id, &action_id) {
                    return Applied::Missed;
                }
                let enabled = self
                    .find_action(&module_id, &action_id)
                    .is_some_and(|a| a.enabled);
                log::info!("permission {action_id} in module {module_id} set enabled={enabled}");
                let state = if enabled { "enabled" } else { "disabled" };
                Applied::Done(format!("Permission '{action_id}' {state}"))
            }
            PermissionIntent::SaveRoles => {
                log::info!("Roles saved");
                Applied::Done("Roles saved".into())
            }
        }
    }
}

/// One screen: its store plus the gate its confirmable intents wait in.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Screen<S, I> {
    pub store: S,
    #[serde(skip)]
    pub gate: ConfirmationGate<I>,
}

impl<S, I> Screen<S, I>
where
    S: Gateway<I>,
    I: Intent + std::fmt::Debug,
{
    pub fn new(store: S) -> Self {
        Self { store, gate: ConfirmationGate::new() }
    }

    /// Park `intent` until the user confirms or cancels it.
    pub fn request(&mut self, intent: I) -> Result<(), GateBusy> {
        let result = self.gate.request(intent);
        if result.is_err() {
            log::warn!("confirmation already pending: {:?}", self.gate.pending());
        }
        result
    }

    /// Apply the pending intent. `None` when nothing was pending.
    pub fn confirm(&mut self) -> Option<Applied> {
        let intent = self.gate.confirm()?;
        Some(self.store.apply(intent))
    }

    /// Drop the pending intent. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.gate.cancel().is_some()
    }

    pub fn prompt(&self) -> Option<Prompt> {
        self.gate.prompt()
    }
}

pub type UsersScreen = Screen<UserStore, UserIntent>;
pub type RolesScreen = Screen<RoleStore, RoleIntent>;
pub type PermissionsScreen = Screen<PermissionStore, PermissionIntent>;

/// Everything one browser session sees. Screens share nothing.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub users: UsersScreen,
    pub roles: RolesScreen,
    pub permissions: PermissionsScreen,
    pub settings: SettingsStore,
}

impl Dashboard {
    pub fn seeded() -> Self {
        Self {
            users: Screen::new(UserStore::seeded()),
            roles: Screen::new(RoleStore::seeded()),
            permissions: Screen::new(PermissionStore::seeded()),
            settings: SettingsStore::seeded(),
        }
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::seeded()
    }
}

pub const DEFAULT_WORKSPACE_IDLE: Duration = Duration::from_secs(30 * 60);
pub const DEFAULT_MAX_WORKSPACES: usize = 1000;

struct Slot {
    dashboard: Dashboard,
    last_seen: Instant,
}

/// All live dashboards, keyed by the workspace id kept in the session cookie.
/// Nothing here outlives the process. Workspaces idle for longer than `idle`
/// are dropped, and at most `capacity` are kept (least recently used goes
/// first).
pub struct Workspaces {
    inner: Mutex<HashMap<String, Slot>>,
    idle: Duration,
    capacity: usize,
}

impl Default for Workspaces {
    fn default() -> Self {
        Self::with_limits(DEFAULT_WORKSPACE_IDLE, DEFAULT_MAX_WORKSPACES)
    }
}

impl Workspaces {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(idle: Duration, capacity: usize) -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
            idle,
            capacity: capacity.max(1),
        }
    }

    /// Run `f` on the dashboard for `id`, seeding one on first use.
    /// The lock is held for the duration of `f` only; never await inside it.
    pub fn with<R>(&self, id: &str, f: impl FnOnce(&mut Dashboard) -> R) -> R {
        let mut map = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let now = Instant::now();

        let before = map.len();
        map.retain(|key, slot| key == id || now.duration_since(slot.last_seen) < self.idle);
        if map.len() < before {
            log::debug!("dropped {} idle workspace(s)", before - map.len());
        }

        if !map.contains_key(id) {
            while map.len() >= self.capacity {
                let Some(oldest) = map
                    .iter()
                    .min_by_key(|(_, slot)| slot.last_seen)
                    .map(|(key, _)| key.clone())
                else {
                    break;
                };
                log::info!("workspace limit reached, dropping {oldest}");
                map.remove(&oldest);
            }
        }

        let slot = map.entry(id.to_string()).or_insert_with(|| {
            log::debug!("seeding workspace {id}");
            Slot { dashboard: Dashboard::seeded(), last_seen: now }
        });
        slot.last_seen = now;
        f(&mut slot.dashboard)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
