//! Client wrappers for the identity API. These helpers centralize
//! session-aware requests so route code stays free of endpoint details, and
//! they must never log tokens or passwords.

use crate::{
    app_lib::{
        AppError, get_optional_json_with_credentials, post_empty_with_credentials,
        post_json_with_credentials, post_json_with_credentials_response,
    },
    features::auth::types::{
        ResendVerificationRequest, SignInRequest, SignUpRequest, UserSession, VerifyEmailRequest,
    },
};

/// Fetches the current session using cookie-based auth.
/// Returns `None` when the session is missing or expired.
pub async fn fetch_session() -> Result<Option<UserSession>, AppError> {
    get_optional_json_with_credentials("/v1/auth/session").await
}

/// Signs in with email and password; the server sets the `HttpOnly` session
/// cookie and returns the session summary.
pub async fn sign_in(request: &SignInRequest) -> Result<UserSession, AppError> {
    post_json_with_credentials_response("/v1/auth/sign-in", request).await
}

/// Creates an account; the resulting session is unverified until the user
/// follows the emailed link.
pub async fn sign_up(request: &SignUpRequest) -> Result<UserSession, AppError> {
    post_json_with_credentials_response("/v1/auth/sign-up", request).await
}

/// Clears the server-side session.
pub async fn sign_out() -> Result<(), AppError> {
    post_empty_with_credentials("/v1/auth/sign-out").await
}

/// Verifies an email token after the user follows the link.
pub async fn verify_email(request: &VerifyEmailRequest) -> Result<(), AppError> {
    post_json_with_credentials("/v1/auth/verify-email", request).await
}

/// Requests a new verification email without leaking account existence.
pub async fn resend_verification(request: &ResendVerificationRequest) -> Result<(), AppError> {
    post_json_with_credentials("/v1/auth/resend-verification", request).await
}
