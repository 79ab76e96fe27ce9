//! Session manager: the single writer of the credential and auth state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Created once in `app::App` and shared through context. Pages call its
//! async operations; route gates read the `AuthState` it publishes.
//!
//! DESIGN
//! ======
//! Every state change updates the token store, the in-memory credential and
//! the `AuthState` in one synchronous step before notifying the observer, so
//! no reader can see a credential without its profile or vice versa.
//! Startup resolution is latched and runs at most once per manager.
//!
//! ERROR HANDLING
//! ==============
//! User-initiated operations (`login`, `register`, `process_oauth_session`)
//! return the `ApiError` for the form to display and leave state untouched.
//! Background operations (`resolve`, `refresh_user`, `logout`) log and
//! degrade to the safest state instead of returning errors.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::{RwSignal, Set};

use super::auth::{AuthState, Roles};
use crate::net::api::AuthApi;
use crate::net::error::ApiError;
use crate::net::types::{AuthResponse, Credential, User};
use crate::util::token_store::TokenStore;

/// Receives every committed `AuthState`.
pub trait SessionObserver {
    fn publish(&self, state: &AuthState);
}

impl SessionObserver for RwSignal<AuthState> {
    fn publish(&self, state: &AuthState) {
        self.set(state.clone());
    }
}

struct Inner<A, S, O> {
    api: A,
    store: S,
    observer: O,
    credential: RefCell<Option<Credential>>,
    state: RefCell<AuthState>,
    resolve_started: Cell<bool>,
}

/// Owns the credential and session state. Clones share the same session.
pub struct SessionManager<A, S, O> {
    inner: Rc<Inner<A, S, O>>,
}

impl<A, S, O> Clone for SessionManager<A, S, O> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<A: AuthApi, S: TokenStore, O: SessionObserver> SessionManager<A, S, O> {
    /// Create a manager in the `Initializing` state and publish it.
    pub fn new(api: A, store: S, observer: O) -> Self {
        let manager = Self {
            inner: Rc::new(Inner {
                api,
                store,
                observer,
                credential: RefCell::new(None),
                state: RefCell::new(AuthState::default()),
                resolve_started: Cell::new(false),
            }),
        };
        manager.inner.observer.publish(&AuthState::default());
        manager
    }

    pub fn api(&self) -> &A {
        &self.inner.api
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> AuthState {
        self.inner.state.borrow().clone()
    }

    pub fn roles(&self) -> Roles {
        self.inner.state.borrow().roles()
    }

    /// Credential for authenticated calls made outside this manager.
    pub fn credential(&self) -> Option<Credential> {
        self.inner.credential.borrow().clone()
    }

    /// Startup hydration. Only the first call does anything.
    ///
    /// A stored credential is exchanged for the current profile; any failure
    /// clears it and lands in `Anonymous`. If another operation replaced the
    /// session while the request was in flight, the stale result is dropped.
    pub async fn resolve(&self) {
        if self.inner.resolve_started.replace(true) {
            return;
        }

        let Some(token) = self.inner.store.load() else {
            log::debug!("no stored credential; session is anonymous");
            self.set_state(AuthState::anonymous());
            return;
        };
        *self.inner.credential.borrow_mut() = Some(token.clone());

        let result = self.inner.api.current_user(&token).await;
        if !self.is_current(&token) {
            log::debug!("session replaced during startup resolution; dropping result");
            return;
        }
        match result {
            Ok(user) => {
                log::debug!("restored session for {}", user.user_id);
                self.set_state(AuthState::authenticated(user));
            }
            Err(e) => {
                log::warn!("stored credential rejected, signing out: {e}");
                self.reset();
            }
        }
    }

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// Returns the API error unchanged (e.g. `InvalidCredentials`); state is
    /// not modified.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let resp = self.inner.api.login(email, password).await.inspect_err(|e| {
            log::warn!("login failed: {e}");
        })?;
        Ok(self.accept(resp))
    }

    /// Create an account and sign in.
    ///
    /// # Errors
    ///
    /// Returns the API error unchanged (e.g. `Validation` for a duplicate
    /// email); state is not modified.
    pub async fn register(&self, email: &str, password: &str, name: &str) -> Result<User, ApiError> {
        let resp = self
            .inner
            .api
            .register(email, password, name)
            .await
            .inspect_err(|e| log::warn!("registration failed: {e}"))?;
        Ok(self.accept(resp))
    }

    /// Exchange a one-time OAuth session id for a credential.
    ///
    /// # Errors
    ///
    /// Returns the API error unchanged (typically `InvalidSession`); state is
    /// not modified.
    pub async fn process_oauth_session(&self, session_id: &str) -> Result<User, ApiError> {
        let resp = self
            .inner
            .api
            .oauth_session(session_id)
            .await
            .inspect_err(|e| log::warn!("oauth session exchange failed: {e}"))?;
        Ok(self.accept(resp))
    }

    /// Sign out. The local session is cleared even if the server call fails.
    pub async fn logout(&self) {
        if let Err(e) = self.inner.api.logout().await {
            log::warn!("logout request failed: {e}");
        }
        self.reset();
    }

    /// Re-fetch the profile after server-side changes (e.g. a completed
    /// payment). Failures are logged and leave state unchanged.
    pub async fn refresh_user(&self) {
        let Some(token) = self.credential() else {
            return;
        };
        if self.inner.state.borrow().loading {
            log::debug!("refresh skipped while startup resolution is pending");
            return;
        }
        match self.inner.api.current_user(&token).await {
            Ok(user) if self.is_current(&token) => self.set_state(AuthState::authenticated(user)),
            Ok(_) => log::debug!("session replaced during refresh; dropping profile"),
            Err(e) => log::warn!("user refresh failed: {e}"),
        }
    }

    fn accept(&self, resp: AuthResponse) -> User {
        let AuthResponse { token, user } = resp;
        self.inner.store.save(&token);
        *self.inner.credential.borrow_mut() = Some(token);
        self.set_state(AuthState::authenticated(user.clone()));
        user
    }

    fn reset(&self) {
        self.inner.store.clear();
        self.inner.credential.borrow_mut().take();
        self.set_state(AuthState::anonymous());
    }

    fn is_current(&self, token: &Credential) -> bool {
        self.inner.credential.borrow().as_ref() == Some(token)
    }

    fn set_state(&self, next: AuthState) {
        *self.inner.state.borrow_mut() = next.clone();
        self.inner.observer.publish(&next);
    }
}
