//! Authentication models and DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::users::UserPayload;

/// Login request with email and password.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Raw login response.
///
/// Older backend builds return the token under `token`, newer ones
/// under `access_token`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponsePayload {
    #[serde(alias = "access_token", alias = "accessToken")]
    pub token: String,
    #[serde(default)]
    pub user: UserPayload,
}

/// Plain acknowledgement returned by mutation endpoints that have
/// nothing else to say.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_validation() {
        let valid = LoginRequest {
            email: "asha@campus.edu".to_string(),
            password: "hunter2".to_string(),
        };
        assert!(valid.validate().is_ok());

        let bad_email = LoginRequest {
            email: "not-an-email".to_string(),
            password: "hunter2".to_string(),
        };
        assert!(bad_email.validate().is_err());

        let empty_password = LoginRequest {
            email: "asha@campus.edu".to_string(),
            password: String::new(),
        };
        assert!(empty_password.validate().is_err());
    }

    #[test]
    fn test_login_response_accepts_both_token_keys() {
        let old: LoginResponsePayload =
            serde_json::from_str(r#"{"token": "t1", "user": {"id": 1}}"#).unwrap();
        assert_eq!(old.token, "t1");

        let new: LoginResponsePayload =
            serde_json::from_str(r#"{"access_token": "t2", "user": {"id": 1}}"#).unwrap();
        assert_eq!(new.token, "t2");
    }

    #[test]
    fn test_login_response_tolerates_missing_user() {
        let payload: LoginResponsePayload = serde_json::from_str(r#"{"token": "t1"}"#).unwrap();
        assert_eq!(payload.user.id, None);
    }
}
