use super::*;
use crate::net::types::{Role, User};
use crate::util::storage::MemoryStorage;

const ADMIN_RECORD: &str = r#"{"id":1,"email":"a@b.com","name":"A","role":"Admin"}"#;

fn initializing() -> SessionState {
    SessionState::default()
}

fn signed_out() -> SessionState {
    let mut store = SessionStore::new(MemoryStorage::default());
    store.restore();
    store.state().clone()
}

fn signed_in() -> SessionState {
    let mut store = SessionStore::new(MemoryStorage::with_record(ADMIN_RECORD));
    store.restore();
    store.state().clone()
}

// =============================================================
// normalize_path
// =============================================================

#[test]
fn normalize_path_strips_trailing_slash() {
    assert_eq!(normalize_path("/login/"), "/login");
    assert_eq!(normalize_path("/clients"), "/clients");
}

#[test]
fn normalize_path_keeps_root() {
    assert_eq!(normalize_path("/"), "/");
    assert_eq!(normalize_path(""), "/");
    assert_eq!(normalize_path("//"), "/");
}

// =============================================================
// decide_redirect
// =============================================================

#[test]
fn no_redirect_while_loading() {
    assert_eq!(decide_redirect(&initializing(), "/clients"), None);
    assert_eq!(decide_redirect(&initializing(), "/login"), None);
}

#[test]
fn signed_out_protected_route_goes_to_login() {
    assert_eq!(decide_redirect(&signed_out(), "/clients"), Some(LOGIN_PATH));
    assert_eq!(decide_redirect(&signed_out(), "/"), Some(LOGIN_PATH));
}

#[test]
fn signed_out_login_route_stays() {
    assert_eq!(decide_redirect(&signed_out(), "/login"), None);
    assert_eq!(decide_redirect(&signed_out(), "/login/"), None);
}

#[test]
fn signed_in_login_route_goes_home() {
    assert_eq!(decide_redirect(&signed_in(), "/login"), Some(HOME_PATH));
}

#[test]
fn signed_in_protected_route_stays() {
    let state = signed_in();
    assert_eq!(state.role(), Role::Admin);
    assert!(state.is_authenticated());
    assert_eq!(decide_redirect(&state, "/clients"), None);
    assert_eq!(decide_redirect(&state, "/"), None);
}

#[test]
fn logout_leaves_pending_redirect_to_login() {
    let mut store = SessionStore::new(MemoryStorage::with_record(ADMIN_RECORD));
    store.restore();
    assert_eq!(decide_redirect(store.state(), "/employees"), None);
    store.logout();
    assert_eq!(decide_redirect(store.state(), "/employees"), Some(LOGIN_PATH));
}

#[test]
fn login_on_login_page_leaves_pending_redirect_home() {
    let mut store = SessionStore::new(MemoryStorage::default());
    store.restore();
    assert!(store.complete_login(Ok(User {
        id: 3,
        email: "i@x.io".to_owned(),
        name: "I".to_owned(),
        role: Role::Intern,
    })));
    assert_eq!(decide_redirect(store.state(), "/login"), Some(HOME_PATH));
}

// =============================================================
// RouteGuard
// =============================================================

#[test]
fn guard_redirects_to_login_exactly_once_after_restore() {
    let mut store = SessionStore::new(MemoryStorage::default());
    let mut guard = RouteGuard::default();

    assert_eq!(guard.evaluate(store.state(), "/clients"), None);
    store.restore();

    let issued: Vec<_> = (0..5).filter_map(|_| guard.evaluate(store.state(), "/clients")).collect();
    assert_eq!(issued, vec![LOGIN_PATH]);
}

#[test]
fn guard_is_silent_in_stable_state() {
    let mut guard = RouteGuard::default();
    let state = signed_in();
    for _ in 0..3 {
        assert_eq!(guard.evaluate(&state, "/projects"), None);
    }
}

#[test]
fn guard_settles_after_navigation_lands() {
    let mut guard = RouteGuard::default();
    let state = signed_out();
    assert_eq!(guard.evaluate(&state, "/clients"), Some(LOGIN_PATH));
    assert_eq!(guard.evaluate(&state, "/login"), None);
    assert_eq!(guard.evaluate(&state, "/login"), None);
}

#[test]
fn guard_issues_again_for_a_new_route() {
    let mut guard = RouteGuard::default();
    let state = signed_out();
    assert_eq!(guard.evaluate(&state, "/clients"), Some(LOGIN_PATH));
    assert_eq!(guard.evaluate(&state, "/interns"), Some(LOGIN_PATH));
}

#[test]
fn restored_admin_is_not_redirected_from_protected_route() {
    let mut guard = RouteGuard::default();
    let state = signed_in();
    assert_eq!(state.role(), Role::Admin);
    assert_eq!(guard.evaluate(&state, "/clients"), None);
}
