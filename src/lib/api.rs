//! HTTP helpers for the JSON API with consistent timeouts and error handling.
//! Feature clients use these helpers to avoid duplicating request setup and to
//! enforce a predictable timeout policy. Session-aware variants ride on the
//! `HttpOnly` cookie; the helpers themselves never store or log credentials.
//!
//! Request bodies only exist in the browser; native builds keep the signatures
//! (so the pure layers compile and test) and fail with a config error.

#![allow(clippy::unused_async)]

use super::errors::AppError;
use serde::{Serialize, de::DeserializeOwned};

#[cfg(target_arch = "wasm32")]
use super::config::AppConfig;
#[cfg(target_arch = "wasm32")]
use gloo_net::http::Request;
#[cfg(target_arch = "wasm32")]
use gloo_timers::callback::Timeout;
#[cfg(target_arch = "wasm32")]
use web_sys::{AbortController, RequestCredentials};

/// Default request timeout (milliseconds) applied to all HTTP helpers.
#[cfg(target_arch = "wasm32")]
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Fetches JSON with cookies for session-authenticated APIs.
pub async fn get_json_with_credentials<T: DeserializeOwned>(path: &str) -> Result<T, AppError> {
    #[cfg(target_arch = "wasm32")]
    {
        let url = build_url(path);
        let response = send_with_timeout(|signal| {
            Request::get(&url)
                .credentials(RequestCredentials::Include)
                .abort_signal(Some(signal))
                .build()
                .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
        })
        .await?;

        handle_json_response(response).await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = path;
        Err(browser_only())
    }
}

/// Fetches JSON with cookies and returns `None` on 204 or 401.
pub async fn get_optional_json_with_credentials<T: DeserializeOwned>(
    path: &str,
) -> Result<Option<T>, AppError> {
    #[cfg(target_arch = "wasm32")]
    {
        let url = build_url(path);
        let response = send_with_timeout(|signal| {
            Request::get(&url)
                .credentials(RequestCredentials::Include)
                .abort_signal(Some(signal))
                .build()
                .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
        })
        .await?;

        handle_optional_json_response(response).await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = path;
        Err(browser_only())
    }
}

/// Posts JSON with cookies and expects an empty response body.
pub async fn post_json_with_credentials<B: Serialize>(
    path: &str,
    body: &B,
) -> Result<(), AppError> {
    #[cfg(target_arch = "wasm32")]
    {
        let url = build_url(path);
        let payload = serde_json::to_string(body)
            .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
        let response = send_with_timeout(move |signal| {
            Request::post(&url)
                .header("Content-Type", "application/json")
                .credentials(RequestCredentials::Include)
                .abort_signal(Some(signal))
                .body(payload)
                .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
        })
        .await?;

        handle_empty_response(response).await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (path, body);
        Err(browser_only())
    }
}

/// Posts JSON with cookies and parses a JSON response. Used by flows that
/// hydrate session state from the reply, such as sign-in.
pub async fn post_json_with_credentials_response<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    #[cfg(target_arch = "wasm32")]
    {
        let url = build_url(path);
        let payload = serde_json::to_string(body)
            .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
        let response = send_with_timeout(move |signal| {
            Request::post(&url)
                .header("Content-Type", "application/json")
                .credentials(RequestCredentials::Include)
                .abort_signal(Some(signal))
                .body(payload)
                .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
        })
        .await?;

        handle_json_response(response).await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (path, body);
        Err(browser_only())
    }
}

/// Posts an empty body with cookies, used to clear a session.
pub async fn post_empty_with_credentials(path: &str) -> Result<(), AppError> {
    #[cfg(target_arch = "wasm32")]
    {
        let url = build_url(path);
        let response = send_with_timeout(move |signal| {
            Request::post(&url)
                .credentials(RequestCredentials::Include)
                .abort_signal(Some(signal))
                .body("")
                .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
        })
        .await?;

        handle_empty_response(response).await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = path;
        Err(browser_only())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn browser_only() -> AppError {
    AppError::Config("Browser environment required.".to_string())
}

/// Builds a URL from the configured API base URL and the provided path.
#[cfg(target_arch = "wasm32")]
fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    build_url_with_base(&config.api_base_url, path)
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps network errors into user-facing `AppError` variants with timeout detection.
#[cfg(target_arch = "wasm32")]
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
#[cfg(target_arch = "wasm32")]
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<gloo_net::http::Request, AppError>,
) -> Result<gloo_net::http::Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
#[cfg(target_arch = "wasm32")]
async fn handle_json_response<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Http {
            status,
            message: sanitize_body(body),
        })
    }
}

/// Handles empty responses and returns sanitized HTTP errors when needed.
#[cfg(target_arch = "wasm32")]
async fn handle_empty_response(response: gloo_net::http::Response) -> Result<(), AppError> {
    if response.ok() {
        Ok(())
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Http {
            status,
            message: sanitize_body(body),
        })
    }
}

/// Parses optional JSON responses and treats 204/401 as no session.
#[cfg(target_arch = "wasm32")]
async fn handle_optional_json_response<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<Option<T>, AppError> {
    if response.status() == 204 {
        return Ok(None);
    }
    if response.ok() {
        response
            .json::<T>()
            .await
            .map(Some)
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        let status = response.status();
        if status == 401 {
            return Ok(None);
        }
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Http {
            status,
            message: sanitize_body(body),
        })
    }
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
fn sanitize_body(body: String) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{build_url_with_base, sanitize_body};

    #[test]
    fn build_url_joins_base_and_path() {
        assert_eq!(
            build_url_with_base("https://api.selah.app", "/v1/auth/session"),
            "https://api.selah.app/v1/auth/session"
        );
        assert_eq!(
            build_url_with_base("https://api.selah.app/", "v1/auth/session"),
            "https://api.selah.app/v1/auth/session"
        );
    }

    #[test]
    fn build_url_keeps_relative_path_without_base() {
        assert_eq!(build_url_with_base("", "/v1/auth/session"), "/v1/auth/session");
        assert_eq!(build_url_with_base("   ", "/v1/auth/session"), "/v1/auth/session");
    }

    #[test]
    fn sanitize_body_trims_and_truncates() {
        assert_eq!(sanitize_body(String::new()), "Request failed.");
        assert_eq!(sanitize_body("  \n ".to_string()), "Request failed.");
        assert_eq!(sanitize_body("  denied ".to_string()), "denied");

        let long = "x".repeat(500);
        assert_eq!(sanitize_body(long).len(), 200);
    }
}
