//! OAuth redirect handling.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity provider sends the browser back with
//! `#session_id=<id>` in the URL fragment. The id is single-use on the
//! server, so `OAuthCallback` latches before the first await and refuses
//! every later attempt from the same mount, however often the view
//! re-renders.

#[cfg(test)]
#[path = "oauth_test.rs"]
mod oauth_test;

use std::cell::Cell;

use crate::net::api::AuthApi;
use crate::routes;
use crate::state::session::{SessionManager, SessionObserver};
use crate::util::token_store::TokenStore;

const SESSION_KEY: &str = "session_id";

/// Whether `fragment` carries an OAuth session id marker.
pub fn has_session_marker(fragment: &str) -> bool {
    fragment.contains("session_id=")
}

/// Parse `fragment` (with or without the leading `#`) as form-encoded
/// parameters and return a non-empty `session_id`.
pub fn session_id_from_fragment(fragment: &str) -> Option<String> {
    let params = fragment.strip_prefix('#').unwrap_or(fragment);
    params
        .split('&')
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (key == SESSION_KEY).then_some(value)
        })
        .find_map(|value| {
            let decoded = urlencoding::decode(&value.replace('+', " ")).ok()?.into_owned();
            if decoded.trim().is_empty() { None } else { Some(decoded) }
        })
}

/// URL that starts the hosted OAuth flow and returns to `/auth/callback`.
pub fn oauth_start_url(provider_url: &str, origin: &str) -> String {
    let redirect = format!("{}{}", origin.trim_end_matches('/'), routes::AUTH_CALLBACK);
    let sep = if provider_url.contains('?') { '&' } else { '?' };
    format!("{provider_url}{sep}redirect={}", urlencoding::encode(&redirect))
}

/// Where the callback view should go once the exchange settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallbackRedirect {
    pub to: &'static str,
    /// Replace the callback entry so Back cannot return to it.
    pub replace: bool,
}

/// One-shot exchange latch, created once per callback view mount.
#[derive(Debug, Default)]
pub struct OAuthCallback {
    fired: Cell<bool>,
}

impl OAuthCallback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the exchange for `fragment`.
    ///
    /// Returns `None` when this latch already fired; the first caller owns
    /// the navigation.
    pub async fn run<A, S, O>(&self, session: &SessionManager<A, S, O>, fragment: &str) -> Option<CallbackRedirect>
    where
        A: AuthApi,
        S: TokenStore,
        O: SessionObserver,
    {
        if self.fired.replace(true) {
            log::debug!("oauth callback already handled for this mount");
            return None;
        }

        let login = CallbackRedirect { to: routes::LOGIN, replace: false };
        let Some(session_id) = session_id_from_fragment(fragment) else {
            log::warn!("oauth callback reached without a session_id");
            return Some(login);
        };

        match session.process_oauth_session(&session_id).await {
            Ok(user) => {
                log::debug!("oauth sign-in completed for {}", user.user_id);
                Some(CallbackRedirect { to: routes::DASHBOARD, replace: true })
            }
            Err(e) => {
                log::warn!("oauth session processing failed: {e}");
                Some(login)
            }
        }
    }
}
