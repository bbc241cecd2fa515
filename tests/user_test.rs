//! Users store tests: creation with presence validation, denormalized role
//! names, search, update merging, and delete.

use rbac_dash::models::user::*;

fn draft(username: &str, email: &str, role_id: &str) -> UserDraft {
    UserDraft {
        username: username.to_string(),
        email: email.to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        role_id: role_id.to_string(),
        status: UserStatus::Active,
    }
}

#[test]
fn test_seed_users() {
    let store = UserStore::seeded();
    let names: Vec<&str> = store.users().iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, ["admin", "editor", "viewer"]);

    let viewer = store.find("3").expect("viewer seeded");
    assert_eq!(viewer.email, "viewer@example.com");
    assert_eq!(viewer.full_name(), "Viewer User");
    assert_eq!(viewer.status, UserStatus::Inactive);
    assert_eq!(viewer.role, "Viewer");
}

#[test]
fn test_add_user_appends_with_next_id_and_role_name() {
    let mut store = UserStore::seeded();

    let id = store.add(draft("jdoe", "jdoe@example.com", "2")).expect("valid draft");

    assert_eq!(id, "4");
    let last = store.users().last().expect("appended");
    assert_eq!(last.id, "4");
    assert_eq!(last.role, "Editor");
    assert_eq!(last.role_id, "2");
}

#[test]
fn test_add_user_requires_username_email_and_role() {
    let mut store = UserStore::seeded();

    for bad in [draft("", "a@b.c", "1"), draft("a", "   ", "1"), draft("a", "a@b.c", "")] {
        let err = store.add(bad).unwrap_err();
        assert_eq!(err.message, "Please fill in all required fields");
    }
    assert_eq!(store.len(), 3);
}

#[test]
fn test_add_after_delete_can_repeat_an_id() {
    let mut store = UserStore::seeded();
    assert!(store.delete("1"));

    let id = store.add(draft("new", "new@example.com", "3")).unwrap();

    assert_eq!(id, "3");
    assert_eq!(store.users().iter().filter(|u| u.id == "3").count(), 2);
}

#[test]
fn test_delete_missing_user_is_noop() {
    let mut store = UserStore::seeded();
    let before = store.clone();

    assert!(!store.delete("99"));
    assert_eq!(store, before);
}

#[test]
fn test_search_matches_any_text_field_ignoring_case() {
    let store = UserStore::seeded();

    let hits: Vec<&str> = store.search("EDIT").iter().map(|u| u.id.as_str()).collect();
    assert_eq!(hits, ["2"]);

    // every seeded user has last name "User"
    assert_eq!(store.search("user").len(), 3);
    assert_eq!(store.search("").len(), 3);
    assert!(store.search("nobody").is_empty());
}

#[test]
fn test_update_merges_patch() {
    let mut store = UserStore::seeded();
    let patch = UserPatch {
        email: Some("root@example.com".to_string()),
        status: Some(UserStatus::Inactive),
        ..UserPatch::default()
    };

    assert_eq!(store.update("1", patch), Ok(true));

    let admin = store.find("1").unwrap();
    assert_eq!(admin.email, "root@example.com");
    assert_eq!(admin.status, UserStatus::Inactive);
    assert_eq!(admin.username, "admin");
}

#[test]
fn test_update_role_recopies_role_name() {
    let mut store = UserStore::seeded();
    let patch = UserPatch { role_id: Some("3".to_string()), ..UserPatch::default() };

    store.update("1", patch).unwrap();

    let admin = store.find("1").unwrap();
    assert_eq!(admin.role_id, "3");
    assert_eq!(admin.role, "Viewer");
}

#[test]
fn test_update_missing_user_is_silent() {
    let mut store = UserStore::seeded();
    let patch = UserPatch { username: Some("ghost".to_string()), ..UserPatch::default() };

    assert_eq!(store.update("42", patch), Ok(false));
    assert_eq!(store, UserStore::seeded());
}

#[test]
fn test_update_rejects_blank_required_field() {
    let mut store = UserStore::seeded();
    let patch = UserPatch { username: Some(" ".to_string()), ..UserPatch::default() };

    assert!(store.update("1", patch).is_err());
    assert_eq!(store.find("1").unwrap().username, "admin");
}

#[test]
fn test_delete_prompt_text() {
    let prompt = rbac_dash::models::confirm::Intent::prompt(&UserIntent::Delete { id: "1".into() });
    assert_eq!(prompt.message, "Are you sure you want to delete this user?");
}
