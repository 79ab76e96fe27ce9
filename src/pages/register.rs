//! Registration page.

use leptos::prelude::*;

use super::login::{OAuthButton, validate_register_input};
use crate::app::use_session;
use crate::config::ClientConfig;
use crate::routes;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let config = expect_context::<ClientConfig>();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value, name_value) =
            match validate_register_input(&email.get(), &password.get(), &name.get()) {
                Ok(input) => input,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        error.set(String::new());

        let session = session.get_value();
        leptos::task::spawn_local(async move {
            if let Err(e) = session.register(&email_value, &password_value, &name_value).await {
                error.set(e.user_message());
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"SmartSignalFX"</h1>
                <p class="login-card__subtitle">"Create your account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error">{move || error.get()}</p>
                </Show>
                <OAuthButton provider_url=config.oauth_url.clone()/>
                <p class="login-card__footer">
                    "Already registered? "
                    <a href=routes::LOGIN>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
