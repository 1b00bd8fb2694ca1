//! Post-verification handoff. Confirms the email is verified and advances to
//! profile completion: automatically after a short pause, or immediately via
//! the button. The pending auto-advance is a single cancellable timer handle,
//! dropped on unmount, so it can never fire late or navigate twice — clicking
//! the button changes the path, which unmounts this screen and cancels it.

use crate::components::{AppShell, Button};
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[component]
pub fn EmailVerifiedPage() -> impl IntoView {
    let navigate = use_navigate();

    #[cfg(target_arch = "wasm32")]
    {
        use crate::features::auth::policy::HANDOFF_DELAY_MS;
        use gloo_timers::callback::Timeout;

        let auto_advance = navigate.clone();
        let timer = StoredValue::new_local(Some(Timeout::new(
            HANDOFF_DELAY_MS,
            move || {
                auto_advance(paths::PROFILE_NEW_USER, NavigateOptions::default());
            },
        )));

        on_cleanup(move || {
            // Dropping the handle cancels a still-pending callback.
            timer.update_value(|stored| {
                stored.take();
            });
        });
    }

    let complete_now = move |_| {
        navigate(paths::PROFILE_NEW_USER, NavigateOptions::default());
    };

    view! {
        <AppShell>
            <div class="max-w-sm mx-auto text-center space-y-6 py-8">
                <div class="space-y-2">
                    <h1 class="text-xl font-bold text-stone-900 dark:text-white">
                        "Email verified"
                    </h1>
                    <p class="text-stone-500 dark:text-stone-400">
                        "Thanks for confirming your address. Taking you to profile setup in a few seconds."
                    </p>
                </div>
                <Button button_type="button" on:click=complete_now>
                    "Complete profile now"
                </Button>
            </div>
        </AppShell>
    }
}
