use leptos::prelude::*;

/// Neutral loading indicator. Also what the route gate renders while a
/// session check or redirect is in flight, so it must not hint at any
/// protected content.
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div
            class="inline-block h-7 w-7 animate-spin rounded-full border-4 border-stone-200 border-t-amber-600"
            role="status"
            aria-live="polite"
            aria-label="Loading"
        ></div>
    }
}
