//! Email verification. Consumes the fragment token from the emailed link when
//! one is present, then hands off to the post-verification screen; without a
//! token (the reminder banner links here) it offers a resend form. The token
//! rides in the URL fragment so it never reaches server logs, and it is
//! scrubbed from the address bar before any request is made.

use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::types::{ResendVerificationRequest, VerifyEmailRequest};
use crate::features::auth::{client, state::use_auth};
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[derive(Clone, Debug, PartialEq)]
enum VerifyStatus {
    Idle,
    MissingToken,
    Pending,
    Error(String),
}

#[derive(Clone, Debug, PartialEq)]
enum ResendStatus {
    Idle,
    Pending,
    Success,
    Error(String),
}

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (status, set_status) = signal(VerifyStatus::Idle);
    let (resend_email, set_resend_email) = signal(String::new());
    let (resend_status, set_resend_status) = signal(ResendStatus::Idle);

    let verify_action = Action::new_local(move |token_value: &String| {
        let request = VerifyEmailRequest {
            token: token_value.clone(),
        };
        async move { client::verify_email(&request).await }
    });

    Effect::new(move |_| {
        if status.get() != VerifyStatus::Idle {
            return;
        }

        match extract_token_from_hash() {
            Some(token) => {
                set_status.set(VerifyStatus::Pending);
                verify_action.dispatch(token);
            }
            None => set_status.set(VerifyStatus::MissingToken),
        }

        clear_token_fragment();
    });

    Effect::new(move |_| {
        if let Some(result) = verify_action.value().get() {
            match result {
                Ok(()) => {
                    auth.mark_verified();
                    navigate(paths::EMAIL_VERIFIED, Default::default());
                }
                Err(err) => set_status.set(VerifyStatus::Error(err.to_string())),
            }
        }
    });

    let resend_action = Action::new_local(move |email: &String| {
        let request = ResendVerificationRequest {
            email: email.clone(),
        };
        async move { client::resend_verification(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = resend_action.value().get() {
            match result {
                Ok(()) => set_resend_status.set(ResendStatus::Success),
                Err(err) => set_resend_status.set(ResendStatus::Error(err.to_string())),
            }
        }
    });

    let on_resend_click = move |_| {
        let email_value = resend_email.get_untracked().trim().to_string();
        if email_value.is_empty() {
            set_resend_status.set(ResendStatus::Error(
                "Email is required to resend verification.".to_string(),
            ));
            return;
        }
        if !email_value.contains('@') {
            set_resend_status.set(ResendStatus::Error(
                "Email address looks invalid.".to_string(),
            ));
            return;
        }

        set_resend_status.set(ResendStatus::Pending);
        resend_action.dispatch(email_value);
    };

    view! {
        <AppShell>
            <div class="max-w-lg mx-auto">
                <h1 class="text-2xl font-semibold text-stone-900 dark:text-white">
                    "Verify your email"
                </h1>
                {move || match status.get() {
                    VerifyStatus::Idle | VerifyStatus::Pending => view! {
                        <div class="mt-4">
                            <Spinner />
                        </div>
                    }
                    .into_any(),
                    VerifyStatus::MissingToken => view! {
                        <div class="mt-4">
                            <Alert
                                kind=AlertKind::Info
                                message="Check your inbox for the verification link, or request a new one below.".to_string()
                            />
                        </div>
                    }
                    .into_any(),
                    VerifyStatus::Error(message) => view! {
                        <div class="mt-4">
                            <Alert kind=AlertKind::Error message=message />
                        </div>
                    }
                    .into_any(),
                }}
                <div class=format!("mt-8 {}", Theme::CARD)>
                    <h2 class="text-sm font-semibold text-stone-900 dark:text-white">
                        "Need a new link?"
                    </h2>
                    <p class="mt-1 text-sm text-stone-600 dark:text-stone-300">
                        "Enter your email to resend the verification link."
                    </p>
                    <div class="mt-4">
                        <label class=Theme::LABEL for="resend_email">
                            "Email"
                        </label>
                        <input
                            id="resend_email"
                            type="email"
                            class=Theme::INPUT
                            autocomplete="email"
                            placeholder="name@inbox.im"
                            on:input=move |event| set_resend_email.set(event_target_value(&event))
                        />
                    </div>
                    <div class="mt-4">
                        <Button
                            button_type="button"
                            disabled=resend_action.pending()
                            on:click=on_resend_click
                        >
                            "Resend verification"
                        </Button>
                    </div>
                    {move || {
                        resend_action
                            .pending()
                            .get()
                            .then_some(view! { <div class="mt-4"><Spinner /></div> })
                    }}
                    {move || match resend_status.get() {
                        ResendStatus::Idle | ResendStatus::Pending => None,
                        ResendStatus::Success => Some(view! {
                            <div class="mt-4">
                                <Alert
                                    kind=AlertKind::Success
                                    message="If that email exists, a new link is on the way.".to_string()
                                />
                            </div>
                        }),
                        ResendStatus::Error(message) => Some(view! {
                            <div class="mt-4">
                                <Alert kind=AlertKind::Error message=message />
                            </div>
                        }),
                    }}
                </div>
            </div>
        </AppShell>
    }
}

#[cfg(target_arch = "wasm32")]
fn extract_token_from_hash() -> Option<String> {
    let hash = web_sys::window()?.location().hash().ok()?;
    let trimmed = hash.trim_start_matches('#');
    if trimmed.is_empty() {
        return None;
    }
    let params = web_sys::UrlSearchParams::new_with_str(trimmed).ok()?;
    params.get("token")
}

#[cfg(not(target_arch = "wasm32"))]
fn extract_token_from_hash() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
fn clear_token_fragment() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let history = match window.history() {
        Ok(history) => history,
        Err(_) => return,
    };
    let _ = history.replace_state_with_url(
        &wasm_bindgen::JsValue::NULL,
        "",
        Some(crate::routes::paths::VERIFY_EMAIL),
    );
}

#[cfg(not(target_arch = "wasm32"))]
fn clear_token_fragment() {}
