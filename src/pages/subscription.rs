//! Subscription plans, checkout hand-off and payment confirmation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Checkout happens on the payment provider's hosted page. It returns the
//! browser to `/subscription/success?session_id=...`, where the status is
//! polled until the backend records the payment and the profile (and so the
//! premium gates) refresh.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::app::use_session;
use crate::components::loading::LoadingScreen;
use crate::components::shell::MemberShell;
use crate::config::ClientConfig;
use crate::net::api::BillingApi;
use crate::net::types::SubscriptionPlan;
use crate::routes;
use crate::state::auth::AuthState;
use crate::util::payment::{PaymentOutcome, browser_sleep, confirm_payment};

const CHECKOUT_PARAM: &str = "session_id";

#[component]
pub fn SubscriptionPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = use_session();
    let plans = RwSignal::new(Vec::<SubscriptionPlan>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let api_session = session.get_value();
    leptos::task::spawn_local(async move {
        match api_session.api().subscription_plans().await {
            Ok(list) => plans.set(list),
            Err(e) => {
                log::error!("loading subscription plans failed: {e}");
                error.set(e.user_message());
            }
        }
        loading.set(false);
    });

    let premium = move || auth.with(|a| a.roles().premium);

    let start_checkout = move || {
        if busy.get() {
            return;
        }
        let session = session.get_value();
        let Some(token) = session.credential() else {
            return;
        };
        busy.set(true);
        error.set(String::new());
        leptos::task::spawn_local(async move {
            match session.api().create_checkout(&token, &current_origin()).await {
                Ok(checkout) => {
                    log::debug!("redirecting to checkout {}", checkout.session_id);
                    #[cfg(feature = "csr")]
                    {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(&checkout.url);
                        }
                    }
                }
                Err(e) => {
                    log::error!("checkout creation failed: {e}");
                    error.set(e.user_message());
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <MemberShell>
            <div class="subscription">
                <h1>"Subscription"</h1>
                <Show when=premium>
                    <p class="subscription__current">"You have full access to premium signals."</p>
                </Show>
                <Show when=move || !error.get().is_empty()>
                    <p class="subscription__error">{move || error.get()}</p>
                </Show>
                <Show when=move || !loading.get() fallback=|| view! { <LoadingScreen message="Loading plans..."/> }>
                    <div class="subscription__plans">
                        <For each=move || plans.get() key=|plan| plan.plan_id.clone() let:plan>
                            <div class="plan-card">
                                <h2 class="plan-card__name">{plan.name.clone()}</h2>
                                <p class="plan-card__price">{format!("${:.2}/month", plan.price)}</p>
                                <ul class="plan-card__features">
                                    {plan.features.iter().map(|f| view! { <li>{f.clone()}</li> }).collect_view()}
                                </ul>
                                <button
                                    class="btn btn--primary plan-card__subscribe"
                                    disabled=move || busy.get() || premium()
                                    on:click=move |_| start_checkout()
                                >
                                    "Subscribe"
                                </button>
                            </div>
                        </For>
                    </div>
                </Show>
            </div>
        </MemberShell>
    }
}

#[component]
pub fn SubscriptionSuccessPage() -> impl IntoView {
    let session = use_session();
    let config = expect_context::<ClientConfig>();
    let query = use_query_map();
    let outcome = RwSignal::new(None::<PaymentOutcome>);

    match query.get_untracked().get(CHECKOUT_PARAM) {
        Some(checkout_id) => {
            let session = session.get_value();
            let poll = config.payment_poll;
            leptos::task::spawn_local(async move {
                let result = confirm_payment(&session, &checkout_id, poll, browser_sleep).await;
                outcome.set(Some(result));
            });
        }
        None => outcome.set(Some(PaymentOutcome::Failed)),
    }

    view! {
        <MemberShell>
            <div class="subscription subscription--status">
                {move || match outcome.get() {
                    None => view! { <LoadingScreen message="Confirming your payment..."/> }.into_any(),
                    Some(PaymentOutcome::Paid) => {
                        view! {
                            <h1>"Welcome to Pro"</h1>
                            <p>"Your payment was confirmed. Premium signals are now unlocked."</p>
                            <a href=routes::DASHBOARD class="btn btn--primary">"Go to Signals"</a>
                        }
                            .into_any()
                    }
                    Some(PaymentOutcome::Pending) => {
                        view! {
                            <h1>"Payment processing"</h1>
                            <p>"We have not received confirmation yet. Check back in a few minutes."</p>
                        }
                            .into_any()
                    }
                    Some(PaymentOutcome::Failed) => {
                        view! {
                            <h1>"Payment not confirmed"</h1>
                            <p>"We could not verify this checkout."</p>
                            <a href=routes::SUBSCRIPTION class="btn">"Back to plans"</a>
                        }
                            .into_any()
                    }
                }}
            </div>
        </MemberShell>
    }
}

fn current_origin() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}
