//! Public landing page. Content (devotionals, blog posts) is served by other
//! parts of the platform; this shell only orients visitors.

use crate::components::AppShell;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="max-w-2xl mx-auto space-y-4">
                <h1 class="text-2xl font-semibold text-stone-900 dark:text-white">
                    "Selah"
                </h1>
                <p class="text-stone-600 dark:text-stone-300">
                    "Pause, read, and reflect. Join a study plan, keep a private journal, and talk it over with the community."
                </p>
                <div class="flex gap-4">
                    <A
                        href={paths::BIBLE_STUDY}
                        {..}
                        class="font-medium text-amber-700 hover:underline dark:text-amber-400"
                    >
                        "Start studying"
                    </A>
                    <A
                        href={paths::ABOUT}
                        {..}
                        class="font-medium text-stone-500 hover:underline dark:text-stone-400"
                    >
                        "About Selah"
                    </A>
                </div>
            </div>
        </AppShell>
    }
}
