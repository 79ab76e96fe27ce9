//! Login page with email/password and optional hosted OAuth sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful sign-in only updates the session; the route gate then moves
//! the visitor off this guest-only page to the remembered `from` path or the
//! dashboard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::app::use_session;
use crate::config::ClientConfig;
use crate::routes;

/// Trimmed email and password, or the message to show.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter your email.");
    }
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Trimmed email, password and display name, or the message to show.
pub fn validate_register_input(
    email: &str,
    password: &str,
    name: &str,
) -> Result<(String, String, String), &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter your name.");
    }
    let (email, password) = validate_login_input(email, password)?;
    Ok((email, password, name.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let config = expect_context::<ClientConfig>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
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
            if let Err(e) = session.login(&email_value, &password_value).await {
                error.set(e.user_message());
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"SmartSignalFX"</h1>
                <p class="login-card__subtitle">"Sign in to your account"</p>
                <form class="login-form" on:submit=on_submit>
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
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error">{move || error.get()}</p>
                </Show>
                <OAuthButton provider_url=config.oauth_url.clone()/>
                <p class="login-card__footer">
                    "No account yet? "
                    <a href=routes::REGISTER>"Create one"</a>
                </p>
            </div>
        </div>
    }
}

/// "Continue with Google" link; hidden when no provider is configured.
#[component]
pub fn OAuthButton(provider_url: Option<String>) -> impl IntoView {
    provider_url.map(|provider_url| {
        view! {
            <div class="login-divider"></div>
            <a
                href="#"
                class="login-button login-button--oauth"
                on:click=move |ev| {
                    ev.prevent_default();
                    #[cfg(feature = "csr")]
                    {
                        if let Some(window) = web_sys::window() {
                            let origin = window.location().origin().unwrap_or_default();
                            let target = crate::util::oauth::oauth_start_url(&provider_url, &origin);
                            let _ = window.location().set_href(&target);
                        }
                    }
                    #[cfg(not(feature = "csr"))]
                    let _ = &provider_url;
                }
            >
                "Continue with Google"
            </a>
        }
    })
}
