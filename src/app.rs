//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds the single `SessionManager` for the page, exposes it and the
//! `AuthState` signal it publishes through context, and starts startup
//! resolution. An OAuth return (`#session_id=` in the fragment) is handled
//! before the router so the exchange starts without waiting on the gate.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
    hooks::use_location,
};

use crate::components::route_gate::RouteGate;
use crate::config::ClientConfig;
use crate::net::api::HttpApi;
use crate::pages::{
    auth_callback::AuthCallbackPage,
    landing::LandingPage,
    login::LoginPage,
    members::{
        AdminPage, AlertsPage, AnalysisPage, CalculatorPage, DashboardPage, InsightsPage, PairAnalysisPage,
        PerformancePage,
    },
    register::RegisterPage,
    settings::SettingsPage,
    subscription::{SubscriptionPage, SubscriptionSuccessPage},
};
use crate::routes;
use crate::state::auth::AuthState;
use crate::state::session::SessionManager;
use crate::util::oauth::has_session_marker;
use crate::util::token_store::BrowserTokenStore;

/// The session manager wired to the browser.
pub type AppSession = SessionManager<HttpApi, BrowserTokenStore, RwSignal<AuthState>>;

/// Context handle for the page's session. The manager is not `Send`, so it
/// lives in local arena storage.
pub type SessionHandle = StoredValue<AppSession, LocalStorage>;

/// Session handle provided by `App`.
///
/// # Panics
///
/// Panics outside the `App` tree.
pub fn use_session() -> SessionHandle {
    expect_context::<SessionHandle>()
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let auth = RwSignal::new(AuthState::default());
    let session: AppSession = SessionManager::new(
        HttpApi::new(config.api_base.clone()),
        BrowserTokenStore::new(config.token_key.clone()),
        auth,
    );

    provide_context(auth);
    provide_context(config);
    provide_context::<SessionHandle>(StoredValue::new_local(session.clone()));

    leptos::task::spawn_local(async move {
        session.resolve().await;
    });

    view! {
        <Title text="SmartSignalFX"/>
        <Router>
            <AppRoutes/>
        </Router>
    }
}

#[component]
fn AppRoutes() -> impl IntoView {
    let location = use_location();
    let oauth_return = Memo::new(move |_| has_session_marker(&location.hash.get()));

    move || {
        if oauth_return.get() {
            view! { <AuthCallbackPage/> }.into_any()
        } else {
            view! {
                <RouteGate>
                    <Routes fallback=|| view! { <Redirect path=routes::LANDING/> }>
                        <Route path=StaticSegment("") view=LandingPage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("register") view=RegisterPage/>
                        <Route path=(StaticSegment("auth"), StaticSegment("callback")) view=AuthCallbackPage/>
                        <Route path=StaticSegment("dashboard") view=DashboardPage/>
                        <Route path=StaticSegment("analysis") view=AnalysisPage/>
                        <Route path=(StaticSegment("analysis"), ParamSegment("pair")) view=PairAnalysisPage/>
                        <Route path=StaticSegment("performance") view=PerformancePage/>
                        <Route path=StaticSegment("calculator") view=CalculatorPage/>
                        <Route path=StaticSegment("alerts") view=AlertsPage/>
                        <Route path=StaticSegment("subscription") view=SubscriptionPage/>
                        <Route
                            path=(StaticSegment("subscription"), StaticSegment("success"))
                            view=SubscriptionSuccessPage
                        />
                        <Route path=StaticSegment("settings") view=SettingsPage/>
                        <Route path=StaticSegment("insights") view=InsightsPage/>
                        <Route path=StaticSegment("admin") view=AdminPage/>
                    </Routes>
                </RouteGate>
            }
            .into_any()
        }
    }
}
