use serde::{Deserialize, Serialize};

/// Public profile attached to an account. Separate from the session summary
/// so profile edits never touch auth state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub display_name: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub display_name: String,
}
