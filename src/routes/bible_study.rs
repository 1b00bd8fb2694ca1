//! Study plans area. Signed-in only; plan content itself comes from the
//! content API and is intentionally minimal here.

use crate::components::AppShell;
use leptos::prelude::*;

#[component]
pub fn BibleStudyPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="max-w-2xl mx-auto space-y-4">
                <h1 class="text-2xl font-semibold text-stone-900 dark:text-white">
                    "Bible Study"
                </h1>
                <p class="text-stone-600 dark:text-stone-300">
                    "Your study plans and reading progress."
                </p>
            </div>
        </AppShell>
    }
}
