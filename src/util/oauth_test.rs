use super::*;
use crate::net::error::ApiError;
use crate::net::mock::{Call, MockApi, auth_response, user};
use crate::state::auth::AuthState;
use crate::util::token_store::MemoryTokenStore;
use futures::executor::block_on;

struct Discard;

impl SessionObserver for Discard {
    fn publish(&self, _state: &AuthState) {}
}

fn session(api: &MockApi) -> SessionManager<MockApi, MemoryTokenStore, Discard> {
    SessionManager::new(api.clone(), MemoryTokenStore::default(), Discard)
}

fn is_exchange(call: &Call) -> bool {
    matches!(call, Call::OAuthSession(_))
}

// =============================================================
// Fragment parsing
// =============================================================

#[test]
fn marker_detection() {
    assert!(has_session_marker("#session_id=abc"));
    assert!(!has_session_marker("#section-2"));
    assert!(!has_session_marker(""));
}

#[test]
fn session_id_with_and_without_hash() {
    assert_eq!(session_id_from_fragment("#session_id=abc123"), Some("abc123".to_owned()));
    assert_eq!(session_id_from_fragment("session_id=abc123"), Some("abc123".to_owned()));
}

#[test]
fn session_id_among_other_params_is_decoded() {
    assert_eq!(
        session_id_from_fragment("#state=x&session_id=a%2Bb+c&foo=1"),
        Some("a+b c".to_owned())
    );
}

#[test]
fn empty_or_missing_session_id_is_none() {
    assert_eq!(session_id_from_fragment("#session_id="), None);
    assert_eq!(session_id_from_fragment("#other_session_id=abc"), None);
    assert_eq!(session_id_from_fragment(""), None);
}

#[test]
fn start_url_points_back_at_callback_route() {
    assert_eq!(
        oauth_start_url("https://auth.example.com/", "https://app.example.com/"),
        "https://auth.example.com/?redirect=https%3A%2F%2Fapp.example.com%2Fauth%2Fcallback"
    );
    assert_eq!(
        oauth_start_url("https://auth.example.com/login?app=fx", "http://localhost:8080"),
        "https://auth.example.com/login?app=fx&redirect=http%3A%2F%2Flocalhost%3A8080%2Fauth%2Fcallback"
    );
}

// =============================================================
// OAuthCallback
// =============================================================

#[test]
fn successful_exchange_replaces_history_with_dashboard() {
    let api = MockApi::default();
    api.push_oauth(Ok(auth_response("tok", user("g1", false, false))));
    let session = session(&api);

    let outcome = block_on(OAuthCallback::new().run(&session, "#session_id=abc"));

    assert_eq!(outcome, Some(CallbackRedirect { to: "/dashboard", replace: true }));
    assert_eq!(api.calls(), vec![Call::OAuthSession("abc".to_owned())]);
    assert!(session.roles().authenticated);
}

#[test]
fn missing_session_id_goes_to_login_without_exchange() {
    let api = MockApi::default();
    let session = session(&api);

    let outcome = block_on(OAuthCallback::new().run(&session, "#session_id="));

    assert_eq!(outcome, Some(CallbackRedirect { to: "/login", replace: false }));
    assert!(api.calls().is_empty());
}

#[test]
fn failed_exchange_goes_to_login() {
    let api = MockApi::default();
    api.push_oauth(Err(ApiError::InvalidSession));
    let session = session(&api);

    let outcome = block_on(OAuthCallback::new().run(&session, "#session_id=used"));

    assert_eq!(outcome, Some(CallbackRedirect { to: "/login", replace: false }));
    assert!(!session.roles().authenticated);
}

#[test]
fn concurrent_runs_exchange_exactly_once() {
    let api = MockApi::default();
    api.push_oauth(Ok(auth_response("tok", user("g1", false, false))));
    api.push_oauth(Ok(auth_response("tok2", user("g1", false, false))));
    let session = session(&api);
    let callback = OAuthCallback::new();

    let (first, second) = block_on(async {
        futures::join!(
            callback.run(&session, "#session_id=abc"),
            callback.run(&session, "#session_id=abc")
        )
    });

    assert_eq!(api.count(is_exchange), 1);
    assert_eq!(first, Some(CallbackRedirect { to: "/dashboard", replace: true }));
    assert_eq!(second, None);
}

#[test]
fn latch_also_blocks_after_completion() {
    let api = MockApi::default();
    api.push_oauth(Err(ApiError::InvalidSession));
    let session = session(&api);
    let callback = OAuthCallback::new();

    block_on(callback.run(&session, "#session_id=abc"));
    let again = block_on(callback.run(&session, "#session_id=abc"));

    assert_eq!(again, None);
    assert_eq!(api.count(is_exchange), 1);
}
