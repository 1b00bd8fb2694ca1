mod about;
mod bible_study;
mod community;
mod email_verified;
mod home;
mod journal;
mod not_found;
pub mod paths;
mod profile;
mod sign_in;
mod sign_up;
mod verify_email;

pub use about::AboutPage;
pub use bible_study::BibleStudyPage;
pub use community::CommunityPage;
pub use email_verified::EmailVerifiedPage;
pub use home::HomePage;
pub use journal::JournalPage;
pub use not_found::NotFoundPage;
pub use profile::ProfilePage;
pub use sign_in::SignInPage;
pub use sign_up::SignUpPage;
pub use verify_email::VerifyEmailPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/about") view=AboutPage />
            <Route path=path!("/sign-in") view=SignInPage />
            <Route path=path!("/sign-up") view=SignUpPage />
            <Route path=path!("/verify-email") view=VerifyEmailPage />
            <Route path=path!("/email-verified") view=EmailVerifiedPage />
            <Route path=path!("/profile") view=ProfilePage />
            <Route path=path!("/bible-study") view=BibleStudyPage />
            <Route path=path!("/community") view=CommunityPage />
            <Route path=path!("/journal") view=JournalPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
