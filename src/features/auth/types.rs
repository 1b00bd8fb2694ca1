//! Request and response types for the identity API. Verification tokens pass
//! through here on their way to the server and must never be logged.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub display_name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerifyEmailRequest {
    pub token: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResendVerificationRequest {
    pub email: String,
}

/// Session summary returned by the API to hydrate auth state.
/// This mirrors cookie-backed session state and contains no secrets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    pub user_id: String,
    pub email: String,
    pub display_name: Option<String>,
    pub email_verified: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_session_round_trips() {
        let session = UserSession {
            user_id: "u_01".to_string(),
            email: "ruth@inbox.im".to_string(),
            display_name: Some("Ruth".to_string()),
            email_verified: false,
        };

        let json = serde_json::to_string(&session).expect("Failed to serialize");
        assert!(json.contains("ruth@inbox.im"));
        assert!(json.contains("email_verified"));

        let decoded: UserSession = serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(decoded, session);
    }

    #[test]
    fn user_session_tolerates_missing_display_name() {
        let json = r#"{"user_id":"u_02","email":"noemi@inbox.im","display_name":null,"email_verified":true}"#;
        let decoded: UserSession = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(decoded.display_name, None);
        assert!(decoded.email_verified);
    }
}
