//! OAuth return view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted either for `/auth/callback` or for any path whose fragment carries
//! `session_id=`. Each mount owns one `OAuthCallback` latch, so the
//! single-use session id is exchanged at most once.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::app::use_session;
use crate::components::loading::LoadingScreen;
use crate::util::oauth::OAuthCallback;

#[component]
pub fn AuthCallbackPage() -> impl IntoView {
    let session = use_session().get_value();
    let navigate = use_navigate();
    let fragment = use_location().hash.get_untracked();
    let callback = Rc::new(OAuthCallback::new());

    leptos::task::spawn_local(async move {
        if let Some(redirect) = callback.run(&session, &fragment).await {
            navigate(redirect.to, NavigateOptions { replace: redirect.replace, ..Default::default() });
        }
    });

    view! { <LoadingScreen message="Completing sign-in..."/> }
}
