use crate::components::AppShell;
use leptos::prelude::*;

/// Public about page.
#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="max-w-2xl mx-auto space-y-4">
                <h1 class="text-2xl font-semibold text-stone-900 dark:text-white">
                    "About"
                </h1>
                <p class="text-stone-600 dark:text-stone-300">
                    "Selah is a small place on the web for unhurried scripture reading: guided study plans, a journal that stays yours, and conversation that assumes good faith."
                </p>
            </div>
        </AppShell>
    }
}
