//! Public landing page.

use leptos::prelude::*;

use crate::routes;
use crate::state::auth::AuthState;

#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let signed_in = move || auth.with(|a| a.roles().authenticated);

    view! {
        <div class="landing">
            <header class="landing__header">
                <span class="landing__brand">"SmartSignalFX"</span>
                <span class="landing__spacer"></span>
                <Show
                    when=signed_in
                    fallback=|| {
                        view! {
                            <a href=routes::LOGIN class="btn landing__login">"Sign In"</a>
                            <a href=routes::REGISTER class="btn btn--primary landing__register">"Get Started"</a>
                        }
                    }
                >
                    <a href=routes::DASHBOARD class="btn btn--primary">"Open Dashboard"</a>
                </Show>
            </header>
            <section class="landing__hero">
                <h1>"AI-powered forex signals"</h1>
                <p>"Trade signals, market analysis and risk tools for the major currency pairs."</p>
            </section>
        </div>
    }
}
