use crate::{
    features::auth::{client, state::use_auth},
    routes::paths,
};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::components::A;

/// Renders the signed-in state for the auth routes (sign-in/sign-up).
#[component]
pub fn AlreadySignedInPanel() -> impl IntoView {
    let auth = use_auth();
    let user_email =
        Signal::derive(move || auth.session.get().map(|s| s.email).unwrap_or_default());

    view! {
        <div class="max-w-sm mx-auto text-center space-y-6 py-8">
            <div class="space-y-2">
                <h2 class="text-xl font-bold text-stone-900 dark:text-white">
                    "Already Signed In"
                </h2>
                <p class="text-stone-500 dark:text-stone-400">
                    "You are currently signed in as "
                    <span class="font-medium text-stone-900 dark:text-stone-200">
                        {move || user_email.get()}
                    </span> "."
                </p>
            </div>
            <div class="flex flex-col gap-3">
                <A
                    href={paths::HOME}
                    {..}
                    class="w-full inline-flex justify-center items-center px-5 py-2.5 text-sm font-medium text-white bg-amber-700 rounded-lg hover:bg-amber-800 transition-all shadow-sm"
                >
                    "Go Home"
                </A>
                <button
                    type="button"
                    on:click=move |_| {
                        spawn_local(async move {
                            if let Err(err) = client::sign_out().await {
                                log::warn!("sign-out failed: {err}");
                            }
                            auth.clear_session();
                        });
                    }
                    class="w-full inline-flex justify-center items-center px-5 py-2.5 text-sm font-medium text-stone-900 bg-white border border-stone-200 rounded-lg hover:bg-stone-100 hover:text-amber-700 dark:bg-stone-800 dark:text-stone-400 dark:border-stone-600 dark:hover:text-white dark:hover:bg-stone-700 transition-all"
                >
                    "Sign Out"
                </button>
            </div>
        </div>
    }
}
