//! Route constants shared by navigation, the gate, and redirects.

pub const HOME: &str = "/";
pub const ABOUT: &str = "/about";
pub const SIGN_IN: &str = "/sign-in";
pub const SIGN_UP: &str = "/sign-up";
pub const VERIFY_EMAIL: &str = "/verify-email";
pub const EMAIL_VERIFIED: &str = "/email-verified";
pub const PROFILE: &str = "/profile";
pub const BIBLE_STUDY: &str = "/bible-study";
pub const COMMUNITY: &str = "/community";
pub const JOURNAL: &str = "/journal";

/// Where the post-verification handoff lands: profile completion, flagged so
/// the page can greet a brand-new account.
pub const PROFILE_NEW_USER: &str = "/profile?newUser=true";

/// Route prefixes that require a signed-in identity. Fixed at initialization;
/// the order is part of the configuration contract. A path is covered when it
/// equals a prefix exactly or continues it with `/`.
pub const PROTECTED_PREFIXES: &[&str] = &[BIBLE_STUDY, COMMUNITY, JOURNAL];
