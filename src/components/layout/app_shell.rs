//! Shared layout wrapper with navigation and content container. It centralizes
//! header markup and the mobile menu toggle so routes can focus on content.
//! The verification nag renders above page content on every shelled route.

use crate::app_lib::{build_info, theme::Theme};
use crate::components::VerificationNag;
use crate::features::auth::{client, state::use_auth};
use crate::routes::paths;
use leptos::{prelude::*, task::spawn_local};
use leptos_router::components::A;
use leptos_router::hooks::use_location;

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let toggle_menu = move |_| {
        set_menu_open.update(|open| *open = !*open);
    };
    let auth = use_auth();
    let is_authenticated = auth.is_authenticated;
    let location = use_location();
    let on_sign_in = move || location.pathname.get() == paths::SIGN_IN;

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-stone-200 dark:bg-stone-900">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A
                        href={paths::HOME}
                        {..}
                        class="flex items-center space-x-3"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        <span class="text-xl font-semibold whitespace-nowrap text-stone-900 dark:text-white">
                            "Selah"
                        </span>
                    </A>
                    <button
                        type="button"
                        class="inline-flex items-center p-2 w-10 h-10 justify-center text-sm text-stone-500 rounded-lg md:hidden hover:bg-stone-100 focus:outline-none focus:ring-2 focus:ring-stone-200 dark:text-stone-400 dark:hover:bg-stone-700"
                        aria-controls="navbar-default"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=toggle_menu
                    >
                        <span class="sr-only">"Open main menu"</span>
                        <svg
                            class="w-5 h-5"
                            aria-hidden="true"
                            xmlns="http://www.w3.org/2000/svg"
                            fill="none"
                            viewBox="0 0 17 14"
                        >
                            <path
                                stroke="currentColor"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d="M1 1h15M1 7h15M1 13h15"
                            ></path>
                        </svg>
                    </button>
                    <div
                        id="navbar-default"
                        class="w-full md:block md:w-auto"
                        class:hidden=move || !menu_open.get()
                    >
                        <ul class="font-medium flex flex-col p-4 md:p-0 mt-4 border border-stone-100 rounded-lg bg-stone-50 md:flex-row md:space-x-8 md:mt-0 md:border-0 md:bg-white dark:bg-stone-800 md:dark:bg-stone-900 dark:border-stone-700">
                            <li>
                                <A
                                    href={paths::BIBLE_STUDY}
                                    {..}
                                    class=Theme::NAV_LINK
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    "Bible Study"
                                </A>
                            </li>
                            <li>
                                <A
                                    href={paths::COMMUNITY}
                                    {..}
                                    class=Theme::NAV_LINK
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    "Community"
                                </A>
                            </li>
                            <li>
                                <A
                                    href={paths::JOURNAL}
                                    {..}
                                    class=Theme::NAV_LINK
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    "Journal"
                                </A>
                            </li>
                            <li>
                                <Show
                                    when=move || is_authenticated.get()
                                    fallback=move || {
                                        view! {
                                            <Show
                                                when=on_sign_in
                                                fallback=move || {
                                                    view! {
                                                        <A
                                                            href={paths::SIGN_IN}
                                                            {..}
                                                            class=Theme::NAV_LINK
                                                            on:click=move |_| set_menu_open.set(false)
                                                        >
                                                            "Sign In"
                                                        </A>
                                                    }
                                                }
                                            >
                                                <A
                                                    href={paths::SIGN_UP}
                                                    {..}
                                                    class=Theme::NAV_LINK
                                                    on:click=move |_| set_menu_open.set(false)
                                                >
                                                    "Sign Up"
                                                </A>
                                            </Show>
                                        }
                                    }
                                >
                                    <button
                                        type="button"
                                        class=Theme::NAV_LINK
                                        on:click=move |_| {
                                            spawn_local(async move {
                                                if let Err(err) = client::sign_out().await {
                                                    log::warn!("sign-out failed: {err}");
                                                }
                                                auth.clear_session();
                                            });
                                            set_menu_open.set(false);
                                        }
                                    >
                                        "Sign Out"
                                    </button>
                                </Show>
                            </li>
                        </ul>
                    </div>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6 space-y-6">
                    <VerificationNag />
                    {children()}
                </div>
            </main>
            <footer class="p-4 text-center text-xs text-stone-400 dark:text-stone-600">
                {format!("Selah · {}", build_info::git_commit_hash())}
            </footer>
        </div>
    }
}
