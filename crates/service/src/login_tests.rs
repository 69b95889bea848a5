use std::sync::Arc;

use cafe_admin_core::Session;
use cafe_admin_core::constants::{
    INVALID_CREDENTIALS_MESSAGE, MISSING_CREDENTIALS_MESSAGE, SESSION_KEY,
};
use cafe_admin_storage::{KeyValueStore, MemoryStore, SessionStore, StorageAreas};

use crate::{Location, LoginController, LoginElements, LoginForm, Mount, Navigation};

fn test_areas() -> (StorageAreas, Arc<MemoryStore>, Arc<MemoryStore>) {
    let tab = Arc::new(MemoryStore::new());
    let persistent = Arc::new(MemoryStore::new());
    (StorageAreas::new(tab.clone(), persistent.clone()), tab, persistent)
}

fn mount_ready(areas: &StorageAreas) -> LoginController {
    LoginController::mount(areas, Some(LoginElements { password_toggle: true }))
        .ready()
        .expect("login page should mount")
}

#[test]
fn test_absent_form_is_noop() {
    let (areas, _tab, _persistent) = test_areas();
    assert!(matches!(LoginController::mount(&areas, None), Mount::Absent));
}

#[test]
fn test_existing_session_replaces_with_dashboard() {
    let (areas, _tab, _persistent) = test_areas();
    SessionStore::new(areas.clone()).write(&Session::new("admin", 1), true).unwrap();

    let mount = LoginController::mount(&areas, Some(LoginElements::default()));

    assert_eq!(mount.redirect(), Some(Navigation::Replace(Location::Dashboard)));
}

#[test]
fn test_empty_fields_show_missing_message() {
    let (areas, tab, persistent) = test_areas();
    let mut login = mount_ready(&areas);

    for (user, pass) in [("", "coffee123"), ("admin", "   "), ("  ", "")] {
        let nav = login.submit(&LoginForm::new(user, pass, false)).unwrap();
        assert_eq!(nav, None);
        assert_eq!(login.error_message(), Some(MISSING_CREDENTIALS_MESSAGE));
    }
    assert!(tab.is_empty().unwrap());
    assert!(persistent.is_empty().unwrap());
}

#[test]
fn test_wrong_credentials_create_no_session() {
    let (areas, tab, persistent) = test_areas();
    let mut login = mount_ready(&areas);

    for (user, pass) in [
        ("admin", "coffee1234"),
        ("Admin", "coffee123"),
        ("root", "coffee123"),
        ("admin", "COFFEE123"),
        ("coffee123", "admin"),
    ] {
        let nav = login.submit(&LoginForm::new(user, pass, true)).unwrap();
        assert_eq!(nav, None, "{user}/{pass} should be rejected");
        assert_eq!(login.error_message(), Some(INVALID_CREDENTIALS_MESSAGE));
    }
    assert!(tab.is_empty().unwrap());
    assert!(persistent.is_empty().unwrap());
}

#[test]
fn test_valid_login_without_remember_uses_tab_area() {
    let (areas, tab, persistent) = test_areas();
    let mut login = mount_ready(&areas);

    let nav = login.submit(&LoginForm::new("admin", "coffee123", false)).unwrap();

    assert_eq!(nav, Some(Navigation::Assign(Location::Dashboard)));
    assert!(tab.get(SESSION_KEY).unwrap().is_some());
    assert!(persistent.get(SESSION_KEY).unwrap().is_none());
    assert_eq!(login.error_message(), None);
}

#[test]
fn test_valid_login_with_remember_uses_persistent_area() {
    let (areas, tab, persistent) = test_areas();
    let mut login = mount_ready(&areas);

    login.submit(&LoginForm::new("admin", "coffee123", true)).unwrap();

    assert!(tab.get(SESSION_KEY).unwrap().is_none());
    assert!(persistent.get(SESSION_KEY).unwrap().is_some());
}

#[test]
fn test_surrounding_whitespace_is_trimmed() {
    let (areas, _tab, _persistent) = test_areas();
    let mut login = mount_ready(&areas);

    let nav = login.submit(&LoginForm::new("  admin ", "\tcoffee123 ", false)).unwrap();

    assert_eq!(nav, Some(Navigation::Assign(Location::Dashboard)));
    assert_eq!(SessionStore::new(areas).read().unwrap().user, "admin");
}

#[test]
fn test_error_cleared_after_successful_retry() {
    let (areas, _tab, _persistent) = test_areas();
    let mut login = mount_ready(&areas);

    login.submit(&LoginForm::new("admin", "nope", false)).unwrap();
    assert!(login.error_message().is_some());

    login.submit(&LoginForm::new("admin", "coffee123", false)).unwrap();
    assert_eq!(login.error_message(), None);
}

#[test]
fn test_password_toggle_flips_type_and_label() {
    let (areas, _tab, _persistent) = test_areas();
    let mut login = mount_ready(&areas);
    assert_eq!(login.password_input_type(), "password");
    assert_eq!(login.toggle_label(), "Show password");

    login.toggle_password_visibility();
    assert_eq!(login.password_input_type(), "text");
    assert_eq!(login.toggle_label(), "Hide password");

    login.toggle_password_visibility();
    assert_eq!(login.password_input_type(), "password");
}

#[test]
fn test_password_toggle_needs_control() {
    let (areas, _tab, _persistent) = test_areas();
    let mut login = LoginController::mount(&areas, Some(LoginElements { password_toggle: false }))
        .ready()
        .unwrap();

    login.toggle_password_visibility();

    assert_eq!(login.password_input_type(), "password");
}
