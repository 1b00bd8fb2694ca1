use crate::components::AppShell;
use leptos::prelude::*;

/// Community discussion area. Signed-in only.
#[component]
pub fn CommunityPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="max-w-2xl mx-auto space-y-4">
                <h1 class="text-2xl font-semibold text-stone-900 dark:text-white">
                    "Community"
                </h1>
                <p class="text-stone-600 dark:text-stone-300">
                    "Threads from people reading alongside you."
                </p>
            </div>
        </AppShell>
    }
}
