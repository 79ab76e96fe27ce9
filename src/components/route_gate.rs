//! Route gate wrapping the router outlet.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every navigation is evaluated against the current `AuthState` by
//! `util::auth::evaluate`. While the session is still initializing nothing
//! protected renders; redirects replace the history entry so Back does not
//! bounce the visitor into the same redirect again.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::loading::LoadingScreen;
use crate::routes::{Access, access_for};
use crate::state::auth::AuthState;
use crate::util::auth::{GateDecision, evaluate, requested_path};

const RETURN_PARAM: &str = "from";

#[component]
pub fn RouteGate(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| {
        let pathname = location.pathname.get();
        // Unknown paths render so the router fallback can send them home.
        let access = access_for(&pathname).unwrap_or(Access::Public);
        let requested = requested_path(&pathname, &location.search.get());
        let return_to = location.query.get().get(RETURN_PARAM);
        auth.with(|state| evaluate(state, access, &requested, return_to.as_deref()))
    });

    Effect::new(move || {
        if let GateDecision::Redirect { to } = decision.get() {
            log::debug!("route gate redirecting to {to}");
            navigate(&to, NavigateOptions { replace: true, ..Default::default() });
        }
    });

    move || match decision.get() {
        GateDecision::Render => children().into_any(),
        GateDecision::Pending | GateDecision::Redirect { .. } => view! { <LoadingScreen/> }.into_any(),
    }
}
