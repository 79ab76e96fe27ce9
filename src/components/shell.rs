//! Header and navigation frame for signed-in pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Links, tier badge and the upgrade prompt are derived from the session
//! roles, so they update as soon as the profile changes (for example after
//! a payment is confirmed).

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::app::use_session;
use crate::routes;
use crate::state::auth::AuthState;
use crate::util::nav::{is_active, nav_links, shows_upgrade, tier_label};

#[component]
pub fn MemberShell(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();
    let session = use_session();

    let roles = move || auth.with(AuthState::roles);
    let display_name = move || auth.with(|a| a.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());

    let on_logout = move |_| {
        let session = session.get_value();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            // Leave member routes first so the gate does not bounce to login.
            navigate(routes::LANDING, NavigateOptions::default());
            session.logout().await;
        });
    };

    view! {
        <div class="member-shell">
            <header class="member-shell__header">
                <a href=routes::DASHBOARD class="member-shell__brand">"SmartSignalFX"</a>
                <nav class="member-shell__nav">
                    {move || {
                        let pathname = location.pathname.get();
                        nav_links(roles())
                            .into_iter()
                            .map(|link| {
                                let class = if is_active(link, &pathname) {
                                    "member-shell__link member-shell__link--active"
                                } else {
                                    "member-shell__link"
                                };
                                view! { <a href=link.path class=class>{link.label}</a> }
                            })
                            .collect_view()
                    }}
                </nav>
                <span class="member-shell__spacer"></span>
                <Show when=move || shows_upgrade(roles())>
                    <a href=routes::SUBSCRIPTION class="btn member-shell__upgrade">"Upgrade"</a>
                </Show>
                <span class="member-shell__tier">{move || tier_label(roles())}</span>
                <a href=routes::SETTINGS class="member-shell__user">{display_name}</a>
                <button class="btn member-shell__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </header>
            <main class="member-shell__content">{children()}</main>
        </div>
    }
}
