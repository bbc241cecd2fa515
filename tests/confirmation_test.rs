//! Confirmation gate tests across screens: one pending intent per screen,
//! busy rejection, and deletes applied only on confirm.

use rbac_dash::models::confirm::GateBusy;
use rbac_dash::models::permission::PermissionIntent;
use rbac_dash::models::role::RoleIntent;
use rbac_dash::models::user::UserIntent;
use rbac_dash::models::workspace::{Applied, Dashboard};

#[test]
fn test_delete_waits_for_confirmation() {
    let mut d = Dashboard::seeded();

    d.users.request(UserIntent::Delete { id: "2".into() }).unwrap();
    assert_eq!(d.users.store.len(), 3);

    assert_eq!(d.users.confirm(), Some(Applied::Done("User deleted".into())));
    assert_eq!(d.users.store.len(), 2);
    assert!(d.users.store.find("2").is_none());
}

#[test]
fn test_cancelled_delete_keeps_record() {
    let mut d = Dashboard::seeded();

    d.roles.request(RoleIntent::Delete { id: "1".into() }).unwrap();
    assert!(d.roles.cancel());

    assert_eq!(d.roles.store.len(), 3);
    assert_eq!(d.roles.confirm(), None);
}

#[test]
fn test_second_request_is_rejected_and_first_kept() {
    let mut d = Dashboard::seeded();

    d.users.request(UserIntent::Delete { id: "1".into() }).unwrap();
    let second = d.users.request(UserIntent::Delete { id: "2".into() });

    assert_eq!(second, Err(GateBusy));
    d.users.confirm();
    assert!(d.users.store.find("1").is_none());
    assert!(d.users.store.find("2").is_some());
}

#[test]
fn test_screens_have_independent_gates() {
    let mut d = Dashboard::seeded();

    d.users.request(UserIntent::Delete { id: "1".into() }).unwrap();
    d.roles.request(RoleIntent::Delete { id: "1".into() }).unwrap();
    d.permissions.request(PermissionIntent::SaveRoles).unwrap();

    assert!(d.permissions.cancel());
    assert!(d.users.prompt().is_some());
    assert!(d.roles.prompt().is_some());
}

#[test]
fn test_delete_of_vanished_record_is_silent() {
    let mut d = Dashboard::seeded();
    d.users.request(UserIntent::Delete { id: "99".into() }).unwrap();
    assert_eq!(d.users.confirm(), Some(Applied::Missed));
    assert_eq!(d.users.store.len(), 3);
}
