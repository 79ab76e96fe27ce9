//! Wire DTOs for the REST backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend JSON (`user_id`, `is_premium`, ...) so
//! serde derives stay attribute-free. Role flags default to `false` when the
//! backend omits them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque bearer credential issued by the backend.
///
/// Never decoded client-side. `Debug` redacts the value so it cannot leak
/// into logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for an `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// The signed-in user's profile as returned by `/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend user identifier (e.g. `user_3f2a...`).
    pub user_id: String,
    pub email: String,
    /// Display name.
    pub name: String,
    /// Avatar URL from the OAuth provider, if any.
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub is_admin: bool,
    /// ISO-8601 creation timestamp.
    pub created_at: String,
}

/// Body returned by login, registration, and OAuth exchange.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub token: Credential,
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub name: &'a str,
}

#[derive(Debug, Serialize)]
pub struct OAuthSessionRequest<'a> {
    pub session_id: &'a str,
}

/// A purchasable plan listed on the subscription page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionPlan {
    pub plan_id: String,
    pub name: String,
    /// Price in US dollars.
    pub price: f64,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CheckoutRequest<'a> {
    pub origin_url: &'a str,
}

/// Hosted checkout session created by `/subscription/checkout`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CheckoutSession {
    pub url: String,
    pub session_id: String,
}

/// Payment state of a checkout session.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CheckoutStatus {
    #[serde(default)]
    pub status: Option<String>,
    pub payment_status: String,
    /// Amount in the smallest currency unit.
    #[serde(default)]
    pub amount_total: Option<i64>,
}

impl CheckoutStatus {
    pub fn is_paid(&self) -> bool {
        self.payment_status == "paid"
    }
}

/// Error body produced by the backend (`{"detail": "..."}`).
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub detail: serde_json::Value,
}
