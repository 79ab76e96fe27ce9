//! Full-page placeholder shown while a decision is pending.

use leptos::prelude::*;

#[component]
pub fn LoadingScreen(#[prop(into, optional)] message: Option<String>) -> impl IntoView {
    let message = message.unwrap_or_else(|| "Loading...".to_owned());
    view! {
        <div class="loading-screen">
            <div class="loading-screen__spinner"></div>
            <p class="loading-screen__message">{message}</p>
        </div>
    }
}
