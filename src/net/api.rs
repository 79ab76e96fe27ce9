//! REST API client for the signals backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Other builds: stubs returning `ApiError::Unavailable` so native unit
//! tests and tooling compile without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-success responses are mapped through `error::classify`, so callers
//! see semantic variants. Whether an error is surfaced or swallowed is the
//! caller's decision (see `state::session`).

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
#[cfg(feature = "csr")]
use super::error::{Endpoint, classify};
#[cfg(feature = "csr")]
use super::types::{CheckoutRequest, LoginRequest, OAuthSessionRequest, RegisterRequest};
use super::types::{AuthResponse, CheckoutSession, CheckoutStatus, Credential, SubscriptionPlan, User};

/// Authentication endpoints consumed by the session manager.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// `POST /auth/login`.
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError>;

    /// `POST /auth/register`.
    async fn register(&self, email: &str, password: &str, name: &str) -> Result<AuthResponse, ApiError>;

    /// `GET /auth/me` with bearer auth.
    async fn current_user(&self, credential: &Credential) -> Result<User, ApiError>;

    /// `POST /auth/session`; sends browser cookies alongside the id.
    async fn oauth_session(&self, session_id: &str) -> Result<AuthResponse, ApiError>;

    /// `POST /auth/logout`; sends browser cookies.
    async fn logout(&self) -> Result<(), ApiError>;
}

/// Subscription and payment endpoints.
#[allow(async_fn_in_trait)]
pub trait BillingApi {
    async fn subscription_plans(&self) -> Result<Vec<SubscriptionPlan>, ApiError>;

    async fn create_checkout(&self, credential: &Credential, origin_url: &str) -> Result<CheckoutSession, ApiError>;

    async fn checkout_status(&self, credential: &Credential, session_id: &str) -> Result<CheckoutStatus, ApiError>;
}

/// HTTP implementation rooted at the configured API base.
#[derive(Clone, Debug)]
pub struct HttpApi {
    base: String,
}

impl HttpApi {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self { base: base.trim_end_matches('/').to_owned() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }
}

fn checkout_status_path(session_id: &str) -> String {
    format!("/subscription/status/{}", urlencoding::encode(session_id))
}

#[cfg(feature = "csr")]
async fn read_json<T: serde::de::DeserializeOwned>(
    endpoint: Endpoint,
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(classify(endpoint, status, &body));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(feature = "csr")]
#[allow(clippy::needless_pass_by_value)]
fn transport(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

#[cfg(feature = "csr")]
#[allow(clippy::needless_pass_by_value)]
fn encode(e: gloo_net::Error) -> ApiError {
    ApiError::Parse(e.to_string())
}

impl AuthApi for HttpApi {
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.url("/auth/login"))
                .json(&LoginRequest { email, password })
                .map_err(encode)?
                .send()
                .await
                .map_err(transport)?;
            read_json(Endpoint::Login, resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.url("/auth/login"), email, password);
            Err(ApiError::Unavailable)
        }
    }

    async fn register(&self, email: &str, password: &str, name: &str) -> Result<AuthResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.url("/auth/register"))
                .json(&RegisterRequest { email, password, name })
                .map_err(encode)?
                .send()
                .await
                .map_err(transport)?;
            read_json(Endpoint::Register, resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.url("/auth/register"), email, password, name);
            Err(ApiError::Unavailable)
        }
    }

    async fn current_user(&self, credential: &Credential) -> Result<User, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.url("/auth/me"))
                .header("Authorization", &credential.bearer())
                .send()
                .await
                .map_err(transport)?;
            read_json(Endpoint::CurrentUser, resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.url("/auth/me"), credential);
            Err(ApiError::Unavailable)
        }
    }

    async fn oauth_session(&self, session_id: &str) -> Result<AuthResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.url("/auth/session"))
                .credentials(web_sys::RequestCredentials::Include)
                .json(&OAuthSessionRequest { session_id })
                .map_err(encode)?
                .send()
                .await
                .map_err(transport)?;
            read_json(Endpoint::OAuthSession, resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.url("/auth/session"), session_id);
            Err(ApiError::Unavailable)
        }
    }

    async fn logout(&self) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.url("/auth/logout"))
                .credentials(web_sys::RequestCredentials::Include)
                .send()
                .await
                .map_err(transport)?;
            if !resp.ok() {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                return Err(classify(Endpoint::Logout, status, &body));
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = self.url("/auth/logout");
            Err(ApiError::Unavailable)
        }
    }
}

impl BillingApi for HttpApi {
    async fn subscription_plans(&self) -> Result<Vec<SubscriptionPlan>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.url("/subscription/plans"))
                .send()
                .await
                .map_err(transport)?;
            read_json(Endpoint::Billing, resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = self.url("/subscription/plans");
            Err(ApiError::Unavailable)
        }
    }

    async fn create_checkout(&self, credential: &Credential, origin_url: &str) -> Result<CheckoutSession, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.url("/subscription/checkout"))
                .header("Authorization", &credential.bearer())
                .json(&CheckoutRequest { origin_url })
                .map_err(encode)?
                .send()
                .await
                .map_err(transport)?;
            read_json(Endpoint::Billing, resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.url("/subscription/checkout"), credential, origin_url);
            Err(ApiError::Unavailable)
        }
    }

    async fn checkout_status(&self, credential: &Credential, session_id: &str) -> Result<CheckoutStatus, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.url(&checkout_status_path(session_id)))
                .header("Authorization", &credential.bearer())
                .send()
                .await
                .map_err(transport)?;
            read_json(Endpoint::Billing, resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.url(&checkout_status_path(session_id)), credential);
            Err(ApiError::Unavailable)
        }
    }
}
