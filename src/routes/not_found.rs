//! Minimal 404 page for unknown routes.

use crate::components::AppShell;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4 space-y-6">
                <h1 class="text-6xl font-black text-stone-200 dark:text-stone-700 select-none">
                    "404"
                </h1>
                <p class="text-stone-500 dark:text-stone-400 max-w-sm">
                    "The page you requested does not exist."
                </p>
                <A
                    href={paths::HOME}
                    {..}
                    class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-amber-700 rounded-lg hover:bg-amber-800 transition-all"
                >
                    "Go Home"
                </A>
            </div>
        </AppShell>
    }
}
