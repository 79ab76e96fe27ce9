//! Checkout confirmation polling.
//!
//! SYSTEM CONTEXT
//! ==============
//! After the hosted checkout redirects to `/subscription/success`, the
//! backend may not have seen the payment yet. The subscription page polls
//! the session status and, once paid, refreshes the profile so the premium
//! flag (and every gate reading it) updates without a reload.

#[cfg(test)]
#[path = "payment_test.rs"]
mod payment_test;

use std::future::Future;
use std::time::Duration;

use crate::config::PaymentPoll;
use crate::net::api::{AuthApi, BillingApi};
use crate::state::session::{SessionManager, SessionObserver};
use crate::util::token_store::TokenStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentOutcome {
    /// Paid; the profile has been refreshed.
    Paid,
    /// Still unpaid after every attempt.
    Pending,
    /// No credential, or a status request failed.
    Failed,
}

/// Poll `checkout_id` up to `1 + poll.attempts` times, sleeping
/// `poll.interval` between requests.
pub async fn confirm_payment<A, S, O, Z, F>(
    session: &SessionManager<A, S, O>,
    checkout_id: &str,
    poll: PaymentPoll,
    sleep: Z,
) -> PaymentOutcome
where
    A: AuthApi + BillingApi,
    S: TokenStore,
    O: SessionObserver,
    Z: Fn(Duration) -> F,
    F: Future<Output = ()>,
{
    let Some(token) = session.credential() else {
        log::warn!("payment confirmation requested without a session");
        return PaymentOutcome::Failed;
    };

    for attempt in 0..=poll.attempts {
        if attempt > 0 {
            sleep(poll.interval).await;
        }
        match session.api().checkout_status(&token, checkout_id).await {
            Ok(status) if status.is_paid() => {
                session.refresh_user().await;
                return PaymentOutcome::Paid;
            }
            Ok(status) => log::debug!("checkout {checkout_id} not settled: {}", status.payment_status),
            Err(e) => {
                log::error!("payment status check failed: {e}");
                return PaymentOutcome::Failed;
            }
        }
    }
    PaymentOutcome::Pending
}

/// Timer used between status checks in the browser.
#[cfg_attr(not(feature = "csr"), allow(clippy::unused_async))]
pub async fn browser_sleep(duration: Duration) {
    #[cfg(feature = "csr")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(feature = "csr"))]
    let _ = duration;
}
