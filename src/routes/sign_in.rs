//! Sign-in form. On success it hydrates the session and performs the
//! `returnUrl` hop the gate encoded when it bounced the visitor here. Only
//! local absolute paths are honored; anything else lands on the home page.

use crate::app_lib::{AppError, theme::Theme};
use crate::components::{Alert, AlertKind, AlreadySignedInPanel, AppShell, Button, Spinner};
use crate::features::auth::types::SignInRequest;
use crate::features::auth::{client, policy, state::use_auth};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

#[derive(Clone)]
struct SignInInput {
    email: String,
    password: String,
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let query = use_query_map();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let sign_in_action = Action::new_local(move |input: &SignInInput| {
        let request = SignInRequest {
            email: input.email.clone(),
            password: input.password.clone(),
        };
        async move { client::sign_in(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = sign_in_action.value().get() {
            match result {
                Ok(session) => {
                    auth.set_session(session);
                    let return_url = query.get_untracked().get("returnUrl");
                    let target = policy::sanitize_return_url(return_url.as_deref());
                    navigate(&target, Default::default());
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
        if email_value.is_empty() || password_value.trim().is_empty() {
            set_error.set(Some(AppError::Config(
                "Email and password are required.".to_string(),
            )));
            return;
        }

        sign_in_action.dispatch(SignInInput {
            email: email_value,
            password: password_value,
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
                                    "Your password"
                                </label>
                                <input
                                    id="password"
                                    type="password"
                                    class=Theme::INPUT
                                    autocomplete="current-password"
                                    required
                                    on:input=move |event| set_password.set(event_target_value(&event))
                                />
                            </div>
                            <Button button_type="submit" disabled=sign_in_action.pending()>
                                "Sign In"
                            </Button>
                            {move || {
                                sign_in_action
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
