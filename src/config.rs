//! Client configuration resolved from build-time environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so values are baked
//! in with `option_env!` when the crate is compiled. Parsing goes through
//! `ClientConfig::from_vars` so defaults and fallbacks stay unit-testable.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_TOKEN_KEY: &str = "token";
pub const DEFAULT_PAYMENT_POLL_ATTEMPTS: u32 = 5;
pub const DEFAULT_PAYMENT_POLL_INTERVAL_MS: u64 = 2000;

/// Retry policy for confirming a completed checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentPoll {
    /// Follow-up requests after the first status check.
    pub attempts: u32,
    pub interval: Duration,
}

impl Default for PaymentPoll {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_PAYMENT_POLL_ATTEMPTS,
            interval: Duration::from_millis(DEFAULT_PAYMENT_POLL_INTERVAL_MS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// REST API root without a trailing slash, e.g. `https://host/api`.
    pub api_base: String,
    /// localStorage key holding the bearer credential.
    pub token_key: String,
    pub payment_poll: PaymentPoll,
    /// Hosted OAuth entry point; the "Continue with Google" button is hidden
    /// when unset.
    pub oauth_url: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_vars(None, None, None, None, None)
    }
}

impl ClientConfig {
    /// Build config from variables captured at compile time.
    ///
    /// Optional:
    /// - `SIGNALFX_BACKEND_URL`: backend origin; `/api` is appended
    /// - `SIGNALFX_TOKEN_KEY`: default `token`
    /// - `SIGNALFX_PAYMENT_POLL_ATTEMPTS`: default 5
    /// - `SIGNALFX_PAYMENT_POLL_INTERVAL_MS`: default 2000
    /// - `SIGNALFX_OAUTH_URL`: hosted OAuth login page
    pub fn from_build_env() -> Self {
        Self::from_vars(
            option_env!("SIGNALFX_BACKEND_URL"),
            option_env!("SIGNALFX_TOKEN_KEY"),
            option_env!("SIGNALFX_PAYMENT_POLL_ATTEMPTS"),
            option_env!("SIGNALFX_PAYMENT_POLL_INTERVAL_MS"),
            option_env!("SIGNALFX_OAUTH_URL"),
        )
    }

    pub fn from_vars(
        backend_url: Option<&str>,
        token_key: Option<&str>,
        poll_attempts: Option<&str>,
        poll_interval_ms: Option<&str>,
        oauth_url: Option<&str>,
    ) -> Self {
        let api_base = match non_empty(backend_url) {
            Some(url) => format!("{}/api", url.trim_end_matches('/')),
            None => DEFAULT_API_BASE.to_owned(),
        };
        let token_key = non_empty(token_key).unwrap_or(DEFAULT_TOKEN_KEY).to_owned();
        let payment_poll = PaymentPoll {
            attempts: parse_or(poll_attempts, DEFAULT_PAYMENT_POLL_ATTEMPTS),
            interval: Duration::from_millis(parse_or(poll_interval_ms, DEFAULT_PAYMENT_POLL_INTERVAL_MS)),
        };

        let oauth_url = non_empty(oauth_url).map(str::to_owned);

        Self { api_base, token_key, payment_poll, oauth_url }
    }
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, default: T) -> T {
    non_empty(raw)
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}
