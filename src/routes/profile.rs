//! Profile page. The post-verification handoff lands here with
//! `?newUser=true`, which swaps the heading for a completion greeting; the
//! form itself is the same either way.

use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::state::use_auth;
use crate::features::profile::{client, types::UpdateProfileRequest};
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    let query = use_query_map();
    let is_new_user =
        Memo::new(move |_| query.with(|params| params.get("newUser").as_deref() == Some("true")));

    let profile = LocalResource::new(move || async move { client::fetch_profile().await });
    let (display_name, set_display_name) = signal(String::new());
    let (feedback, set_feedback) = signal::<Option<(AlertKind, String)>>(None);

    Effect::new(move |_| {
        if let Some(Ok(current)) = profile.get() {
            if let Some(name) = current.display_name.clone() {
                set_display_name.set(name);
            }
        }
    });

    let save_action = Action::new_local(move |request: &UpdateProfileRequest| {
        let request = request.clone();
        async move { client::update_profile(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(()) => set_feedback.set(Some((
                    AlertKind::Success,
                    "Profile saved.".to_string(),
                ))),
                Err(err) => set_feedback.set(Some((AlertKind::Error, err.to_string()))),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_feedback.set(None);

        let name_value = display_name.get_untracked().trim().to_string();
        if name_value.is_empty() {
            set_feedback.set(Some((
                AlertKind::Error,
                "Display name is required.".to_string(),
            )));
            return;
        }

        save_action.dispatch(UpdateProfileRequest {
            display_name: name_value,
        });
    };

    view! {
        <AppShell>
            <div class="max-w-lg mx-auto space-y-4">
                <h1 class="text-2xl font-semibold text-stone-900 dark:text-white">
                    {move || {
                        if is_new_user.get() {
                            "Welcome! Finish setting up your profile"
                        } else {
                            "Your profile"
                        }
                    }}
                </h1>
                <Show
                    when=move || auth.is_authenticated.get()
                    fallback=move || {
                        view! {
                            <div class="space-y-4">
                                <Alert
                                    kind=AlertKind::Info
                                    message="Sign in to view your profile.".to_string()
                                />
                                <A
                                    href={paths::SIGN_IN}
                                    {..}
                                    class="font-medium text-amber-700 hover:underline dark:text-amber-400"
                                >
                                    "Go to sign in"
                                </A>
                            </div>
                        }
                    }
                >
                    <Suspense fallback=move || view! { <Spinner /> }>
                        {move || match profile.get() {
                            Some(Ok(_)) => view! {
                                <form on:submit=on_submit>
                                    <div class="mb-5">
                                        <label class=Theme::LABEL for="display_name">
                                            "Display name"
                                        </label>
                                        <input
                                            id="display_name"
                                            type="text"
                                            class=Theme::INPUT
                                            autocomplete="nickname"
                                            prop:value=move || display_name.get()
                                            on:input=move |event| {
                                                set_display_name.set(event_target_value(&event))
                                            }
                                        />
                                    </div>
                                    <Button button_type="submit" disabled=save_action.pending()>
                                        "Save"
                                    </Button>
                                    {move || {
                                        feedback
                                            .get()
                                            .map(|(kind, message)| {
                                                view! {
                                                    <div class="mt-4">
                                                        <Alert kind=kind message=message />
                                                    </div>
                                                }
                                            })
                                    }}
                                </form>
                            }
                            .into_any(),
                            Some(Err(err)) => view! {
                                <Alert kind=AlertKind::Error message=err.to_string() />
                            }
                            .into_any(),
                            None => view! { <Spinner /> }.into_any(),
                        }}
                    </Suspense>
                </Show>
            </div>
        </AppShell>
    }
}
