use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::errors::ValidationError;
use crate::validate;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralSettings {
    pub site_name: String,
    pub site_description: String,
    pub email_notifications: bool,
    pub dark_mode: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecuritySettings {
    pub two_factor_auth: bool,
    pub password_expiry: u32,
    pub session_timeout: u32,
    pub min_password_length: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub email_alerts: bool,
    pub browser_notifications: bool,
    pub weekly_reports: bool,
    pub system_updates: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    pub general: GeneralSettings,
    pub security: SecuritySettings,
    pub notifications: NotificationSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            general: GeneralSettings {
                site_name: "Admin Dashboard".into(),
                site_description: "RBAC Management System".into(),
                email_notifications: true,
                dark_mode: false,
            },
            security: SecuritySettings {
                two_factor_auth: false,
                password_expiry: 90,
                session_timeout: 30,
                min_password_length: 8,
            },
            notifications: NotificationSettings {
                email_alerts: true,
                browser_notifications: false,
                weekly_reports: true,
                system_updates: true,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingCategory {
    General,
    Security,
    Notifications,
}

impl SettingCategory {
    pub const ALL: [SettingCategory; 3] = [
        SettingCategory::General,
        SettingCategory::Security,
        SettingCategory::Notifications,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "general" => Some(SettingCategory::General),
            "security" => Some(SettingCategory::Security),
            "notifications" => Some(SettingCategory::Notifications),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SettingCategory::General => "general",
            SettingCategory::Security => "security",
            SettingCategory::Notifications => "notifications",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SettingCategory::General => "General",
            SettingCategory::Security => "Security",
            SettingCategory::Notifications => "Notifications",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SettingCategory::General => "fa-cog",
            SettingCategory::Security => "fa-shield",
            SettingCategory::Notifications => "fa-bell",
        }
    }
}

/// Submitted fields of one settings tab. A checkbox is on when its key is
/// present; unchecked boxes are simply not sent.
pub type SettingsFields = HashMap<String, String>;

fn checked(fields: &SettingsFields, key: &str) -> bool {
    fields.contains_key(key)
}

fn text(fields: &SettingsFields, key: &str, current: &str) -> String {
    fields.get(key).map(|v| v.trim().to_string()).unwrap_or_else(|| current.to_string())
}

fn number(fields: &SettingsFields, key: &str, label: &str, current: u32) -> Result<u32, ValidationError> {
    match fields.get(key) {
        Some(v) => validate::parse_number(v, label),
        None => Ok(current),
    }
}

impl Settings {
    /// Merge one tab's submitted fields into the matching category.
    /// Only the fields that tab shows are touched; nothing changes when a
    /// number field does not parse.
    pub fn apply(&mut self, category: SettingCategory, fields: &SettingsFields) -> Result<(), ValidationError> {
        match category {
            SettingCategory::General => {
                let g = &self.general;
                self.general = GeneralSettings {
                    site_name: text(fields, "site_name", &g.site_name),
                    site_description: text(fields, "site_description", &g.site_description),
                    email_notifications: checked(fields, "email_notifications"),
                    dark_mode: g.dark_mode,
                };
            }
            SettingCategory::Security => {
                let s = &self.security;
                self.security = SecuritySettings {
                    two_factor_auth: checked(fields, "two_factor_auth"),
                    password_expiry: number(fields, "password_expiry", "Password expiry", s.password_expiry)?,
                    session_timeout: number(fields, "session_timeout", "Session timeout", s.session_timeout)?,
                    min_password_length: number(fields, "min_password_length", "Minimum password length", s.min_password_length)?,
                };
            }
            SettingCategory::Notifications => {
                let n = &self.notifications;
                self.notifications = NotificationSettings {
                    email_alerts: checked(fields, "email_alerts"),
                    browser_notifications: checked(fields, "browser_notifications"),
                    weekly_reports: checked(fields, "weekly_reports"),
                    system_updates: n.system_updates,
                };
            }
        }
        Ok(())
    }
}

/// "Settings saved successfully" banner. [`show`](Self::show) turns it on and
/// starts a timer that turns it off again; the timer only holds the flag.
///
/// The flag stores the generation of the save that raised it (0 = hidden),
/// so a timer only clears the banner of its own save.
#[derive(Debug, Clone, Default)]
pub struct SuccessBanner {
    shown: Arc<AtomicU64>,
    generation: Arc<AtomicU64>,
}

impl SuccessBanner {
    pub fn is_visible(&self) -> bool {
        self.shown.load(Ordering::SeqCst) != 0
    }

    /// Must be called from within a tokio runtime.
    pub fn show(&self, delay: Duration) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.shown.store(generation, Ordering::SeqCst);
        let flag = Arc::clone(&self.shown);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // a later save owns the banner now
            let _ = flag.compare_exchange(generation, 0, Ordering::SeqCst, Ordering::SeqCst);
        });
    }
}

/// Settings screen store.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct SettingsStore {
    settings: Settings,
    #[serde(skip)]
    banner: SuccessBanner,
}

impl SettingsStore {
    pub fn seeded() -> Self {
        Self::default()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn banner(&self) -> &SuccessBanner {
        &self.banner
    }

    pub fn update(&mut self, category: SettingCategory, fields: &SettingsFields) -> Result<(), ValidationError> {
        let mut next = self.settings.clone();
        next.apply(category, fields)?;
        self.settings = next;
        Ok(())
    }
}
