//! Dismissible reminder for signed-in users who have not verified their
//! email. Advisory only: it never blocks content and never calls the identity
//! API. Dismissal lives in a per-mount signal, so a reload brings it back.

use crate::features::auth::{policy, state::use_auth};
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn VerificationNag() -> impl IntoView {
    let auth = use_auth();
    let (dismissed, set_dismissed) = signal(false);

    let visible = Memo::new(move |_| policy::nag_visible(auth.snapshot(), dismissed.get()));

    view! {
        {move || {
            visible
                .get()
                .then(|| {
                    view! {
                        <div
                            class="flex items-center justify-between gap-4 rounded-lg border border-amber-200 bg-amber-50 px-4 py-3 text-sm text-amber-800 dark:border-amber-400 dark:bg-amber-900/30 dark:text-amber-100"
                            role="status"
                        >
                            <span>
                                "Please verify your email address to keep your account secure."
                            </span>
                            <div class="flex items-center gap-3 whitespace-nowrap">
                                <A
                                    href={paths::VERIFY_EMAIL}
                                    {..}
                                    class="font-medium underline hover:no-underline"
                                >
                                    "Verify email"
                                </A>
                                <button
                                    type="button"
                                    class="font-medium opacity-70 hover:opacity-100"
                                    aria-label="Dismiss verification reminder"
                                    on:click=move |_| set_dismissed.set(true)
                                >
                                    "Dismiss"
                                </button>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
