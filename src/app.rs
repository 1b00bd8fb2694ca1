use crate::features::auth::guards::RequireAuth;
use crate::features::auth::state::AuthProvider;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

/// Root component. The gate wraps the whole route tree: the path classifier,
/// not the route shape, decides which areas need a signed-in identity.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <AuthProvider>
            <Router>
                <RequireAuth>
                    <AppRoutes />
                </RequireAuth>
            </Router>
        </AuthProvider>
    }
}
