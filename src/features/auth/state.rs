//! Auth session state and context for the frontend. The provider hydrates the
//! session once on mount using cookie-based API calls and exposes derived auth
//! signals for the gate, the nag banner, and routes. Only non-sensitive
//! metadata is stored in memory; cookies remain `HttpOnly`.
//!
//! The context is the single writer surface for session state: the provider
//! (hydration) and the sign-in/sign-out/verification flows acting on the
//! identity provider's behalf call the mutators; everything else only reads.

use crate::features::auth::{client, policy::SessionSnapshot, types::UserSession};
use leptos::{prelude::*, task::spawn_local};

/// Auth session context shared through Leptos.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub session: RwSignal<Option<UserSession>>,
    pub is_loading: RwSignal<bool>,
    pub is_authenticated: Signal<bool>,
    pub is_verified: Signal<bool>,
}

impl AuthContext {
    /// Builds a context around the provided session and loading signals.
    fn new(session: RwSignal<Option<UserSession>>, is_loading: RwSignal<bool>) -> Self {
        let is_authenticated = Signal::derive(move || session.get().is_some());
        let is_verified = Signal::derive(move || {
            session
                .get()
                .map(|current| current.email_verified)
                .unwrap_or(false)
        });
        Self {
            session,
            is_loading,
            is_authenticated,
            is_verified,
        }
    }

    /// Context used when no provider is mounted: signed out, nothing pending.
    fn detached() -> Self {
        Self::new(RwSignal::new(None), RwSignal::new(false))
    }

    /// Point-in-time snapshot for the pure policy layer. Reading it inside a
    /// reactive closure subscribes that closure to session changes.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            identity_present: self.is_authenticated.get(),
            is_loading: self.is_loading.get(),
            is_verified: self.is_verified.get(),
        }
    }

    /// Updates the in-memory session after sign-in or sign-up.
    pub fn set_session(&self, session: UserSession) {
        self.session.set(Some(session));
    }

    /// Clears the in-memory session, typically on sign-out.
    pub fn clear_session(&self) {
        self.session.set(None);
    }

    /// Flips the verified flag after the API confirms an email token.
    pub fn mark_verified(&self) {
        self.session.update(|current| {
            if let Some(session) = current {
                session.email_verified = true;
            }
        });
    }
}

/// Provides auth context and hydrates the session once on mount. Hydration
/// failures leave the context signed out rather than propagating: the gate
/// treats a broken session source as an anonymous visitor.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthContext::new(RwSignal::new(None), RwSignal::new(true));
    provide_context(auth);

    spawn_local(async move {
        match client::fetch_session().await {
            Ok(Some(session)) => auth.set_session(session),
            Ok(None) => {}
            Err(err) => log::warn!("session hydration failed: {err}"),
        }
        auth.is_loading.set(false);
    });

    view! { {children()} }
}

/// Returns the current auth context or a detached signed-out context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(AuthContext::detached)
}
