//! Pure route-authorization policy. The reactive layer (`guards`,
//! `VerificationNag`) only invokes these functions on each session or path
//! change and performs the side effects; every decision lives here so it can
//! be tested without a browser.

use crate::routes::paths;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Percent-encoding set for query-string components. Matches
/// `encodeURIComponent`: everything except alphanumerics and `-_.!~*'()`
/// is escaped, so `/journal` becomes `%2Fjournal`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Milliseconds the verification handoff screen waits before auto-advancing
/// to profile completion.
pub const HANDOFF_DELAY_MS: u32 = 5_000;

/// Point-in-time view of the identity session. While `is_loading` is true the
/// other two fields are not yet authoritative and must not drive a redirect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub identity_present: bool,
    pub is_loading: bool,
    pub is_verified: bool,
}

/// Outcome of one gate evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Session still resolving: render a neutral loading state, navigate nowhere.
    Checking,
    /// Render the requested content unchanged.
    Allowed,
    /// Replace-navigate to `target` and keep rendering the neutral loading
    /// state so protected content never flashes.
    Redirect { target: String },
}

/// Returns true iff `path` equals a protected prefix exactly or starts with
/// `prefix + "/"`. Matching is case-sensitive and exact; trailing slashes are
/// not normalized and there are no wildcard semantics. Downstream consumers
/// depend on these precise rules.
pub fn is_protected(path: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|prefix| {
        path == *prefix
            || path
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with('/'))
    })
}

/// Builds the sign-in redirect for a denied request, carrying the original
/// path as a percent-encoded `returnUrl` for the post-sign-in hop.
pub fn sign_in_redirect(requested: &str) -> String {
    format!(
        "{}?returnUrl={}",
        paths::SIGN_IN,
        utf8_percent_encode(requested, COMPONENT)
    )
}

/// The gate's transition function, re-evaluated whenever the session or the
/// path changes. A session read failure must be presented here as
/// `identity_present: false, is_loading: false` (signed out), never as an
/// error: every input combination maps to a defined state.
pub fn evaluate(session: SessionSnapshot, path: &str, prefixes: &[&str]) -> GateDecision {
    if session.is_loading {
        return GateDecision::Checking;
    }
    if is_protected(path, prefixes) && !session.identity_present {
        return GateDecision::Redirect {
            target: sign_in_redirect(path),
        };
    }
    GateDecision::Allowed
}

/// Returns the navigation the gate should issue for `decision`, given the
/// target of the redirect it last issued. Re-evaluations with an unchanged
/// decision yield `None`, keeping the gate idempotent: one navigation per
/// transition into a redirect, never one per render.
pub fn next_navigation(decision: &GateDecision, last_issued: Option<&str>) -> Option<String> {
    match decision {
        GateDecision::Redirect { target } if last_issued != Some(target.as_str()) => {
            Some(target.clone())
        }
        _ => None,
    }
}

/// Visibility rule for the verification nag banner. Dismissal is per-mount
/// and in-memory only; a verified session hides the banner regardless of it.
pub fn nag_visible(session: SessionSnapshot, dismissed: bool) -> bool {
    session.identity_present && !session.is_verified && !dismissed
}

/// Restricts the post-sign-in hop to same-origin absolute paths. Anything
/// else (external URLs, scheme-relative `//host`, empty values) falls back to
/// the home page.
pub fn sanitize_return_url(raw: Option<&str>) -> String {
    match raw {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_string(),
        _ => paths::HOME.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(identity_present: bool, is_loading: bool, is_verified: bool) -> SessionSnapshot {
        SessionSnapshot {
            identity_present,
            is_loading,
            is_verified,
        }
    }

    #[test]
    fn protected_prefix_matches_exactly_or_with_subpath() {
        let prefixes = paths::PROTECTED_PREFIXES;
        assert!(is_protected("/bible-study", prefixes));
        assert!(is_protected("/bible-study/genesis", prefixes));
        assert!(is_protected("/journal", prefixes));
        assert!(is_protected("/community/threads/42", prefixes));

        assert!(!is_protected("/bible-studyXYZ", prefixes));
        assert!(!is_protected("/about", prefixes));
        assert!(!is_protected("/", prefixes));
        assert!(!is_protected("/Bible-Study", prefixes));
    }

    #[test]
    fn loading_session_always_checks_and_never_redirects() {
        for identity_present in [false, true] {
            let decision = evaluate(
                session(identity_present, true, false),
                paths::JOURNAL,
                paths::PROTECTED_PREFIXES,
            );
            assert_eq!(decision, GateDecision::Checking);
        }
    }

    #[test]
    fn signed_out_protected_path_redirects_with_encoded_return_url() {
        let decision = evaluate(
            session(false, false, false),
            "/journal",
            paths::PROTECTED_PREFIXES,
        );
        assert_eq!(
            decision,
            GateDecision::Redirect {
                target: "/sign-in?returnUrl=%2Fjournal".to_string()
            }
        );
    }

    #[test]
    fn signed_in_protected_path_allows_regardless_of_verification() {
        for is_verified in [false, true] {
            let decision = evaluate(
                session(true, false, is_verified),
                "/journal",
                paths::PROTECTED_PREFIXES,
            );
            assert_eq!(decision, GateDecision::Allowed);
        }
    }

    #[test]
    fn public_path_allows_signed_out_visitors() {
        let decision = evaluate(
            session(false, false, false),
            "/contact",
            paths::PROTECTED_PREFIXES,
        );
        assert_eq!(decision, GateDecision::Allowed);
    }

    #[test]
    fn sign_in_redirect_encodes_nested_paths_and_queries() {
        assert_eq!(
            sign_in_redirect("/bible-study/genesis"),
            "/sign-in?returnUrl=%2Fbible-study%2Fgenesis"
        );
        assert_eq!(
            sign_in_redirect("/journal?entry=3&tab=new"),
            "/sign-in?returnUrl=%2Fjournal%3Fentry%3D3%26tab%3Dnew"
        );
    }

    #[test]
    fn repeated_redirect_decision_issues_one_navigation() {
        let decision = evaluate(
            session(false, false, false),
            "/journal",
            paths::PROTECTED_PREFIXES,
        );

        let first = next_navigation(&decision, None);
        assert_eq!(first.as_deref(), Some("/sign-in?returnUrl=%2Fjournal"));

        let second = next_navigation(&decision, first.as_deref());
        assert_eq!(second, None);
    }

    #[test]
    fn changed_redirect_target_issues_again() {
        let journal = evaluate(
            session(false, false, false),
            "/journal",
            paths::PROTECTED_PREFIXES,
        );
        let community = evaluate(
            session(false, false, false),
            "/community",
            paths::PROTECTED_PREFIXES,
        );

        let first = next_navigation(&journal, None).expect("redirect expected");
        let second = next_navigation(&community, Some(first.as_str()));
        assert_eq!(second.as_deref(), Some("/sign-in?returnUrl=%2Fcommunity"));
    }

    #[test]
    fn allowed_and_checking_issue_no_navigation() {
        assert_eq!(next_navigation(&GateDecision::Allowed, None), None);
        assert_eq!(next_navigation(&GateDecision::Checking, None), None);
    }

    #[test]
    fn nag_visible_only_for_unverified_signed_in_users() {
        assert!(nag_visible(session(true, false, false), false));

        assert!(!nag_visible(session(false, false, false), false));
        assert!(!nag_visible(session(true, false, true), false));
        assert!(!nag_visible(session(true, false, false), true));
        // Verification wins over a stale dismissal flag.
        assert!(!nag_visible(session(true, false, true), true));
    }

    #[test]
    fn handoff_constants_match_contract() {
        assert_eq!(HANDOFF_DELAY_MS, 5_000);
        assert_eq!(paths::PROFILE_NEW_USER, "/profile?newUser=true");
    }

    #[test]
    fn sanitize_return_url_accepts_local_paths_only() {
        assert_eq!(sanitize_return_url(Some("/journal")), "/journal");
        assert_eq!(
            sanitize_return_url(Some("/bible-study/genesis")),
            "/bible-study/genesis"
        );

        assert_eq!(sanitize_return_url(Some("//evil.example")), "/");
        assert_eq!(sanitize_return_url(Some("https://evil.example")), "/");
        assert_eq!(sanitize_return_url(Some("")), "/");
        assert_eq!(sanitize_return_url(None), "/");
    }
}
