//! Sign-up form. A new account starts unverified; after success the visitor
//! lands on the home page, where the verification reminder takes over.

use crate::app_lib::{AppError, theme::Theme};
use crate::components::{Alert, AlertKind, AlreadySignedInPanel, AppShell, Button, Spinner};
use crate::features::auth::types::SignUpRequest;
use crate::features::auth::{client, state::use_auth};
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn SignUpPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (display_name, set_display_name) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let sign_up_action = Action::new_local(move |request: &SignUpRequest| {
        let request = request.clone();
        async move { client::sign_up(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = sign_up_action.value().get() {
            match result {
                Ok(session) => {
                    auth.set_session(session);
                    navigate(paths::HOME, Default::default());
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        let display_name_value = display_name.get_untracked().trim().to_string();
        if email_value.is_empty() || password_value.trim().is_empty() {
            set_error.set(Some(AppError::Config(
                "Email and password are required.".to_string(),
            )));
            return;
        }

        sign_up_action.dispatch(SignUpRequest {
            email: email_value,
            password: password_value,
            display_name: display_name_value,
        });
    };

    view! {
        <AppShell>
            <Show
                when=move || auth.is_authenticated.get()
                fallback=move || {
                    view! {
                        <form class="max-w-sm mx-auto" on:submit=on_submit>
                            <div class="mb-5">
                                <label class=Theme::LABEL for="display_name">
                                    "Display name"
                                </label>
                                <input
                                    id="display_name"
                                    type="text"
                                    class=Theme::INPUT
                                    autocomplete="nickname"
                                    placeholder="Ruth"
                                    on:input=move |event| set_display_name.set(event_target_value(&event))
                                />
                            </div>
                            <div class="mb-5">
                                <label class=Theme::LABEL for="email">
                                    "Your email"
                                </label>
                                <input
                                    id="email"
                                    type="email"
                                    class=Theme::INPUT
                                    autocomplete="email"
                                    placeholder="name@inbox.im"
                                    required
                                    on:input=move |event| set_email.set(event_target_value(&event))
                                />
                            </div>
                            <div class="mb-5">
                                <label class=Theme::LABEL for="password">
                                    "Choose a password"
                                </label>
                                <input
                                    id="password"
                                    type="password"
                                    class=Theme::INPUT
                                    autocomplete="new-password"
                                    required
                                    on:input=move |event| set_password.set(event_target_value(&event))
                                />
                            </div>
                            <Button button_type="submit" disabled=sign_up_action.pending()>
                                "Create account"
                            </Button>
                            {move || {
                                sign_up_action
                                    .pending()
                                    .get()
                                    .then_some(view! { <div class="mt-4"><Spinner /></div> })
                            }}
                            {move || {
                                error
                                    .get()
                                    .map(|err| {
                                        view! {
                                            <div class="mt-4">
                                                <Alert kind=AlertKind::Error message=err.to_string() />
                                            </div>
                                        }
                                    })
                            }}
                        </form>
                    }
                }
            >
                <AlreadySignedInPanel />
            </Show>
        </AppShell>
    }
}
