//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route gates and user-aware components to coordinate login
//! redirects and role-dependent rendering. Written only by
//! `state::session::SessionManager`; everything else reads a snapshot.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
///
/// Starts in `Initializing` (`loading = true`). Startup resolution clears
/// `loading` once and nothing sets it again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

/// Tri-state view of `AuthState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Initializing,
    Authenticated,
    Anonymous,
}

impl AuthState {
    pub fn anonymous() -> Self {
        Self { user: None, loading: false }
    }

    pub fn authenticated(user: User) -> Self {
        Self { user: Some(user), loading: false }
    }

    pub fn phase(&self) -> SessionPhase {
        match (&self.user, self.loading) {
            (_, true) => SessionPhase::Initializing,
            (Some(_), false) => SessionPhase::Authenticated,
            (None, false) => SessionPhase::Anonymous,
        }
    }

    pub fn roles(&self) -> Roles {
        Roles::derive(self.user.as_ref())
    }
}

/// Role flags derived from the profile. Never stored; recompute on read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Roles {
    pub authenticated: bool,
    /// Admins count as premium.
    pub premium: bool,
    pub admin: bool,
}

impl Roles {
    pub fn derive(user: Option<&User>) -> Self {
        match user {
            None => Self::default(),
            Some(u) => Self { authenticated: true, premium: u.is_premium || u.is_admin, admin: u.is_admin },
        }
    }
}
