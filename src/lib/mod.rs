//! Shared frontend utilities for API access, configuration, errors, build
//! metadata, and theme constants.
//!
//! All session-aware requests ride on the `HttpOnly` session cookie; nothing
//! in this layer stores or logs credentials. Centralizing the HTTP helpers
//! keeps timeout and error behavior consistent across features and routes.

pub mod api;
pub mod build_info;
pub mod config;
pub mod errors;
pub mod theme;

pub use api::{
    get_json_with_credentials, get_optional_json_with_credentials, post_empty_with_credentials,
    post_json_with_credentials, post_json_with_credentials_response,
};
pub use errors::AppError;
