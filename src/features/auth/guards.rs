//! The route authorization gate. `RequireAuth` wraps page content and decides,
//! for the current path and session state, whether to render it, show a
//! neutral loading state, or replace-navigate to sign-in. The decision itself
//! is pure (`policy::evaluate`); this component only re-runs it on each
//! relevant change and performs the navigation.

use crate::components::Spinner;
use crate::features::auth::policy::{self, GateDecision};
use crate::features::auth::state::use_auth;
use crate::routes::paths;
use leptos::children::ChildrenFn;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let location = use_location();
    let navigate = use_navigate();
    let last_redirect: StoredValue<Option<String>> = StoredValue::new(None);

    let decision = Memo::new(move |_| {
        policy::evaluate(
            auth.snapshot(),
            &location.pathname.get(),
            paths::PROTECTED_PREFIXES,
        )
    });

    Effect::new(move |_| {
        let current = decision.get();
        if !matches!(current, GateDecision::Redirect { .. }) {
            // Leaving the redirect state re-arms the gate for the next denial.
            last_redirect.set_value(None);
            return;
        }
        let pending =
            last_redirect.with_value(|last| policy::next_navigation(&current, last.as_deref()));
        if let Some(target) = pending {
            last_redirect.set_value(Some(target.clone()));
            // UX-only gate; the API enforces the same policy on every request.
            navigate(
                &target,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! {
        {move || match decision.get() {
            GateDecision::Allowed => children().into_any(),
            GateDecision::Checking | GateDecision::Redirect { .. } => view! {
                <div class="flex justify-center items-center min-h-[50vh]">
                    <Spinner />
                </div>
            }
            .into_any(),
        }}
    }
}
