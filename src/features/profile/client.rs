use crate::app_lib::{AppError, get_json_with_credentials, post_json_with_credentials};
use crate::features::profile::types::{Profile, UpdateProfileRequest};

/// Fetches the signed-in user's profile.
pub async fn fetch_profile() -> Result<Profile, AppError> {
    get_json_with_credentials("/v1/me/profile").await
}

/// Saves profile fields for the signed-in user.
pub async fn update_profile(request: &UpdateProfileRequest) -> Result<(), AppError> {
    post_json_with_credentials("/v1/me/profile", request).await
}
