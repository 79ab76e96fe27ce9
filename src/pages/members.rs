//! Member views behind the authenticated, premium and admin gates.
//!
//! SYSTEM CONTEXT
//! ==============
//! Signal feeds, charts and admin tooling are rendered by backend-driven
//! widgets; these pages provide the routed frame each one mounts into.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::shell::MemberShell;
use crate::routes;
use crate::state::auth::AuthState;

#[component]
fn MemberPage(title: &'static str, summary: &'static str, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <MemberShell>
            <section class="member-page">
                <h1 class="member-page__title">{title}</h1>
                <p class="member-page__summary">{summary}</p>
                {children.map(|c| c())}
            </section>
        </MemberShell>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let greeting = move || {
        auth.with(|a| a.user.as_ref().map(|u| format!("Welcome back, {}.", u.name)).unwrap_or_default())
    };
    view! {
        <MemberPage title="Signals" summary="Live buy and sell signals across the major pairs.">
            <p class="member-page__greeting">{greeting}</p>
        </MemberPage>
    }
}

#[component]
pub fn AnalysisPage() -> impl IntoView {
    view! { <MemberPage title="Analysis" summary="Technical and sentiment analysis per currency pair."/> }
}

#[component]
pub fn PairAnalysisPage() -> impl IntoView {
    let params = use_params_map();
    let pair = move || params.with(|p| p.get("pair").unwrap_or_default().to_uppercase());
    view! {
        <MemberPage title="Pair Analysis" summary="Indicators, levels and recent signals for one pair.">
            <h2 class="member-page__pair">{pair}</h2>
            <a href=routes::ANALYSIS>"All pairs"</a>
        </MemberPage>
    }
}

#[component]
pub fn PerformancePage() -> impl IntoView {
    view! { <MemberPage title="Performance" summary="Historical win rate and pip results of closed signals."/> }
}

#[component]
pub fn CalculatorPage() -> impl IntoView {
    view! { <MemberPage title="Risk Calculator" summary="Position sizing from account balance, risk and stop distance."/> }
}

#[component]
pub fn AlertsPage() -> impl IntoView {
    view! { <MemberPage title="Alerts" summary="Notifications for new signals and price levels."/> }
}

#[component]
pub fn InsightsPage() -> impl IntoView {
    view! { <MemberPage title="AI Insights" summary="Premium market commentary generated for your watchlist."/> }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    view! { <MemberPage title="Admin Panel" summary="User management and signal generation controls."/> }
}
