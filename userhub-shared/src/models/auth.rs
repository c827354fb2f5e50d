//! Request and response bodies for the authentication and profile endpoints.

use serde::{Deserialize, Serialize};

use super::Identity;

/// Standard response wrapper used by every identity service endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiEnvelope<T> {
    /// Whether the service considers the call successful.
    #[serde(default)]
    pub success: bool,
    /// Optional human-readable status message.
    #[serde(default)]
    pub message: Option<String>,
    /// Endpoint-specific payload.
    pub data: Option<T>,
}

/// Credentials submitted to `auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Sign-in email address.
    pub email: String,
    /// Plain-text password, sent over TLS only.
    pub password: String,
}

/// Registration details submitted to `auth/signup`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    /// Display name.
    pub full_name: String,
    /// Sign-in email address.
    pub email: String,
    /// Chosen password.
    pub password: String,
}

/// Payload of a successful login: the identity and its bearer token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthPayload {
    /// The authenticated user.
    pub user: Identity,
    /// Opaque bearer credential.
    pub token: String,
}

/// Payload carrying a single identity (`auth/me`, `users/profile`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserPayload {
    /// The identity as currently stored by the service.
    pub user: Identity,
}

/// Acknowledgement of a successful signup. Signing up never signs in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignupConfirmation {
    /// Message from the service, e.g. "Account created. Please log in."
    pub message: String,
}

/// Editable profile fields submitted to `users/profile`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    /// New display name.
    pub full_name: String,
    /// New sign-in email address.
    pub email: String,
}

/// Body submitted to `users/change-password`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    /// The password currently in use.
    pub current_password: String,
    /// The replacement password.
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_envelope_decodes() {
        let json = r#"{
            "success": true,
            "message": "Login successful",
            "data": {
                "user": {
                    "id": "u-7",
                    "fullName": "Alan Turing",
                    "email": "alan@example.com",
                    "role": "user",
                    "status": "active",
                    "createdAt": "2024-02-01T12:00:00Z",
                    "lastLogin": null
                },
                "token": "opaque.bearer.value"
            }
        }"#;
        let envelope: ApiEnvelope<AuthPayload> = serde_json::from_str(json).unwrap();

        assert!(envelope.success);
        assert_eq!(envelope.message.as_deref(), Some("Login successful"));
        let payload = envelope.data.unwrap();
        assert_eq!(payload.token, "opaque.bearer.value");
        assert_eq!(payload.user.full_name, "Alan Turing");
    }

    #[test]
    fn test_envelope_without_data() {
        let envelope: ApiEnvelope<UserPayload> =
            serde_json::from_str(r#"{"success":true,"message":"Logged out"}"#).unwrap();
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_signup_request_uses_camel_case() {
        let request = SignupRequest {
            full_name: "Alan Turing".to_string(),
            email: "alan@example.com".to_string(),
            password: "Enigma#1936".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["fullName"], "Alan Turing");
        assert!(value.get("full_name").is_none());
    }

    #[test]
    fn test_change_password_request_fields() {
        let request = ChangePasswordRequest {
            current_password: "Old#Pass1".to_string(),
            new_password: "New#Pass2".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["currentPassword"], "Old#Pass1");
        assert_eq!(value["newPassword"], "New#Pass2");
    }
}
