use crate::components::AppShell;
use leptos::prelude::*;

/// Private journal area. Signed-in only.
#[component]
pub fn JournalPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="max-w-2xl mx-auto space-y-4">
                <h1 class="text-2xl font-semibold text-stone-900 dark:text-white">
                    "Journal"
                </h1>
                <p class="text-stone-600 dark:text-stone-300">
                    "Your entries, visible only to you."
                </p>
            </div>
        </AppShell>
    }
}
