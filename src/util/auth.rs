//! Route authorization decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route component applies the same decision, so it lives here as a
//! pure function over the session snapshot and the route's requirement.
//! `components::route_gate` turns the decision into a view or a redirect.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::routes::{self, Access};
use crate::state::auth::AuthState;

/// Outcome of gating one navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Session not resolved yet; show the loading placeholder.
    Pending,
    Render,
    /// Navigate to `to`, replacing the current history entry.
    Redirect { to: String },
}

/// Decide whether `requested` (path plus query) may render.
///
/// `return_to` is the `from` query value on guest-only pages; a signed-in
/// visitor is sent there instead of the dashboard when it is a safe path.
pub fn evaluate(state: &AuthState, access: Access, requested: &str, return_to: Option<&str>) -> GateDecision {
    if state.loading {
        return GateDecision::Pending;
    }
    let roles = state.roles();

    match access {
        Access::Public => GateDecision::Render,
        Access::GuestOnly if roles.authenticated => {
            let to = return_to
                .and_then(sanitize_return_path)
                .unwrap_or_else(|| routes::DASHBOARD.to_owned());
            GateDecision::Redirect { to }
        }
        Access::GuestOnly => GateDecision::Render,
        _ if !roles.authenticated => GateDecision::Redirect { to: login_redirect(requested) },
        Access::Admin if !roles.admin => GateDecision::Redirect { to: routes::DASHBOARD.to_owned() },
        Access::Premium if !roles.premium => GateDecision::Redirect { to: routes::SUBSCRIPTION.to_owned() },
        _ => GateDecision::Render,
    }
}

/// Rebuild the requested location from router parts. `search` may or may
/// not carry its leading `?`.
pub fn requested_path(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() { pathname.to_owned() } else { format!("{pathname}?{search}") }
}

/// Login URL that remembers where the visitor was headed.
pub fn login_redirect(requested: &str) -> String {
    match sanitize_return_path(requested) {
        Some(path) if path != routes::LANDING => {
            format!("{}?from={}", routes::LOGIN, urlencoding::encode(&path))
        }
        _ => routes::LOGIN.to_owned(),
    }
}

/// Accept only same-origin absolute paths that do not point back at the
/// login or registration pages.
pub fn sanitize_return_path(raw: &str) -> Option<String> {
    let path = raw.trim();
    if !path.starts_with('/') || path.starts_with("//") || path.starts_with("/\\") {
        return None;
    }
    let bare = path.split(['?', '#']).next().unwrap_or_default();
    if bare == routes::LOGIN || bare == routes::REGISTER {
        return None;
    }
    Some(path.to_owned())
}
