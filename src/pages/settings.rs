//! Account settings: profile summary, plan and sign-out.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::use_session;
use crate::components::shell::MemberShell;
use crate::routes;
use crate::state::auth::AuthState;
use crate::util::nav::{shows_upgrade, tier_label};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = use_session();
    let navigate = use_navigate();

    let field = move |pick: fn(&crate::net::types::User) -> String| {
        move || auth.with(|a| a.user.as_ref().map(pick).unwrap_or_default())
    };
    let roles = move || auth.with(AuthState::roles);

    let on_logout = move |_| {
        let session = session.get_value();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            navigate(routes::LANDING, NavigateOptions::default());
            session.logout().await;
        });
    };

    view! {
        <MemberShell>
            <div class="settings">
                <h1>"Settings"</h1>
                <dl class="settings__profile">
                    <dt>"Name"</dt>
                    <dd>{field(|u| u.name.clone())}</dd>
                    <dt>"Email"</dt>
                    <dd>{field(|u| u.email.clone())}</dd>
                    <dt>"Member since"</dt>
                    <dd>{field(|u| u.created_at.clone())}</dd>
                    <dt>"Plan"</dt>
                    <dd>{move || tier_label(roles())}</dd>
                </dl>
                <Show when=move || shows_upgrade(roles())>
                    <a href=routes::SUBSCRIPTION class="btn btn--primary">"Upgrade to Pro"</a>
                </Show>
                <button class="btn settings__logout" on:click=on_logout>"Sign Out"</button>
            </div>
        </MemberShell>
    }
}
