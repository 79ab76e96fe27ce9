//! Scripted in-memory API double for unit tests.
//!
//! Each endpoint pops its next scripted result; an unscripted call fails with
//! a transport error. Every call is recorded so tests can assert on network
//! traffic (or its absence). Each call yields once before answering, so
//! concurrently polled futures interleave the way real requests do.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use super::api::{AuthApi, BillingApi};
use super::error::ApiError;
use super::types::{AuthResponse, CheckoutSession, CheckoutStatus, Credential, SubscriptionPlan, User};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Call {
    Login(String),
    Register(String),
    CurrentUser(String),
    OAuthSession(String),
    Logout,
    Plans,
    Checkout(String),
    CheckoutStatus(String),
}

type Script<T> = RefCell<VecDeque<Result<T, ApiError>>>;

#[derive(Default)]
struct Scripts {
    login: Script<AuthResponse>,
    register: Script<AuthResponse>,
    current_user: Script<User>,
    oauth: Script<AuthResponse>,
    logout: Script<()>,
    plans: Script<Vec<SubscriptionPlan>>,
    checkout: Script<CheckoutSession>,
    checkout_status: Script<CheckoutStatus>,
    calls: RefCell<Vec<Call>>,
}

#[derive(Clone, Default)]
pub(crate) struct MockApi {
    inner: Rc<Scripts>,
}

impl MockApi {
    pub fn push_login(&self, result: Result<AuthResponse, ApiError>) {
        self.inner.login.borrow_mut().push_back(result);
    }

    pub fn push_register(&self, result: Result<AuthResponse, ApiError>) {
        self.inner.register.borrow_mut().push_back(result);
    }

    pub fn push_current_user(&self, result: Result<User, ApiError>) {
        self.inner.current_user.borrow_mut().push_back(result);
    }

    pub fn push_oauth(&self, result: Result<AuthResponse, ApiError>) {
        self.inner.oauth.borrow_mut().push_back(result);
    }

    pub fn push_logout(&self, result: Result<(), ApiError>) {
        self.inner.logout.borrow_mut().push_back(result);
    }

    pub fn push_checkout_status(&self, result: Result<CheckoutStatus, ApiError>) {
        self.inner.checkout_status.borrow_mut().push_back(result);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.calls.borrow().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.inner.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    async fn answer<T>(&self, call: Call, script: &Script<T>) -> Result<T, ApiError> {
        self.inner.calls.borrow_mut().push(call);
        YieldOnce(false).await;
        script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("unscripted call".to_owned())))
    }
}

impl AuthApi for MockApi {
    async fn login(&self, email: &str, _password: &str) -> Result<AuthResponse, ApiError> {
        self.answer(Call::Login(email.to_owned()), &self.inner.login).await
    }

    async fn register(&self, email: &str, _password: &str, _name: &str) -> Result<AuthResponse, ApiError> {
        self.answer(Call::Register(email.to_owned()), &self.inner.register).await
    }

    async fn current_user(&self, credential: &Credential) -> Result<User, ApiError> {
        self.answer(Call::CurrentUser(credential.as_str().to_owned()), &self.inner.current_user)
            .await
    }

    async fn oauth_session(&self, session_id: &str) -> Result<AuthResponse, ApiError> {
        self.answer(Call::OAuthSession(session_id.to_owned()), &self.inner.oauth).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.answer(Call::Logout, &self.inner.logout).await
    }
}

impl BillingApi for MockApi {
    async fn subscription_plans(&self) -> Result<Vec<SubscriptionPlan>, ApiError> {
        self.answer(Call::Plans, &self.inner.plans).await
    }

    async fn create_checkout(&self, _credential: &Credential, origin_url: &str) -> Result<CheckoutSession, ApiError> {
        self.answer(Call::Checkout(origin_url.to_owned()), &self.inner.checkout).await
    }

    async fn checkout_status(&self, _credential: &Credential, session_id: &str) -> Result<CheckoutStatus, ApiError> {
        self.answer(Call::CheckoutStatus(session_id.to_owned()), &self.inner.checkout_status)
            .await
    }
}

/// Returns `Pending` on the first poll, waking itself immediately.
struct YieldOnce(bool);

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

pub(crate) fn user(id: &str, is_premium: bool, is_admin: bool) -> User {
    User {
        user_id: id.to_owned(),
        email: format!("{id}@example.com"),
        name: id.to_owned(),
        picture: None,
        is_premium,
        is_admin,
        created_at: "2025-01-01T00:00:00Z".to_owned(),
    }
}

pub(crate) fn auth_response(token: &str, user: User) -> AuthResponse {
    AuthResponse { token: Credential::new(token), user }
}
