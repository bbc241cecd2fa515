//! Settings tests: per-tab merges, checkbox semantics, number parsing, and
//! the self-clearing success banner.

use std::time::Duration;

use rbac_dash::models::setting::*;

fn fields(pairs: &[(&str, &str)]) -> SettingsFields {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[test]
fn test_defaults() {
    let s = Settings::default();
    assert_eq!(s.general.site_name, "Admin Dashboard");
    assert!(s.general.email_notifications);
    assert_eq!(s.security.password_expiry, 90);
    assert_eq!(s.security.session_timeout, 30);
    assert_eq!(s.security.min_password_length, 8);
    assert!(s.notifications.system_updates);
}

#[test]
fn test_general_tab_update() {
    let mut store = SettingsStore::seeded();

    store
        .update(SettingCategory::General, &fields(&[("site_name", "  Ops Console "), ("site_description", "Internal")]))
        .unwrap();

    let g = &store.settings().general;
    assert_eq!(g.site_name, "Ops Console");
    assert_eq!(g.site_description, "Internal");
    // unchecked box is absent from the form
    assert!(!g.email_notifications);
    assert!(!g.dark_mode);
}

#[test]
fn test_security_tab_update() {
    let mut store = SettingsStore::seeded();

    store
        .update(
            SettingCategory::Security,
            &fields(&[("two_factor_auth", "on"), ("session_timeout", "45"), ("password_expiry", "60")]),
        )
        .unwrap();

    let s = &store.settings().security;
    assert!(s.two_factor_auth);
    assert_eq!(s.session_timeout, 45);
    assert_eq!(s.password_expiry, 60);
    assert_eq!(s.min_password_length, 8);
}

#[test]
fn test_bad_number_changes_nothing() {
    let mut store = SettingsStore::seeded();

    let err = store
        .update(SettingCategory::Security, &fields(&[("two_factor_auth", "on"), ("session_timeout", "soon")]))
        .unwrap_err();

    assert_eq!(err.message, "Session timeout must be a whole number");
    assert_eq!(store.settings(), &Settings::default());
}

#[test]
fn test_notifications_tab_keeps_system_updates() {
    let mut store = SettingsStore::seeded();

    store
        .update(SettingCategory::Notifications, &fields(&[("browser_notifications", "on")]))
        .unwrap();

    let n = &store.settings().notifications;
    assert!(n.browser_notifications);
    assert!(!n.email_alerts);
    assert!(!n.weekly_reports);
    assert!(n.system_updates);
}

#[test]
fn test_tabs_are_independent() {
    let mut store = SettingsStore::seeded();
    store.update(SettingCategory::Notifications, &fields(&[])).unwrap();
    assert_eq!(store.settings().general, Settings::default().general);
    assert_eq!(store.settings().security, Settings::default().security);
}

#[test]
fn test_category_parse() {
    assert_eq!(SettingCategory::parse("security"), Some(SettingCategory::Security));
    assert_eq!(SettingCategory::parse("Security"), None);
    for c in SettingCategory::ALL {
        assert_eq!(SettingCategory::parse(c.as_str()), Some(c));
    }
}

#[actix_rt::test]
async fn test_banner_clears_itself() {
    let banner = SuccessBanner::default();
    assert!(!banner.is_visible());

    banner.show(Duration::from_millis(20));
    assert!(banner.is_visible());

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(!banner.is_visible());
}

#[actix_rt::test]
async fn test_earlier_timer_does_not_hide_later_banner() {
    let banner = SuccessBanner::default();

    banner.show(Duration::from_millis(100));
    tokio::time::sleep(Duration::from_millis(60)).await;
    banner.show(Duration::from_millis(100));

    // first timer has fired by now, second has not
    tokio::time::sleep(Duration::from_millis(70)).await;
    assert!(banner.is_visible());

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(!banner.is_visible());
}
