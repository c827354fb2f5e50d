use serde::{Deserialize, Serialize};

/// Error body returned by the identity service on non-2xx responses.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Default)]
pub struct ErrorResponse {
    /// Always `false` for error bodies.
    #[serde(default)]
    pub success: bool,
    /// The main error message, suitable for display next to a form.
    #[serde(default)]
    pub message: String,
    /// Optional per-field validation details.
    #[serde(default)]
    pub errors: Vec<FieldError>,
}

/// A single field-level validation failure.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone)]
pub struct FieldError {
    /// Name of the offending request field.
    #[serde(alias = "path", alias = "param")]
    pub field: String,
    /// Message describing what is wrong with the field.
    #[serde(alias = "msg")]
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new error response with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: Vec::new(),
        }
    }

    /// The text to show the user: the top-level message, or the first field
    /// message when the service left the top-level message empty.
    #[must_use]
    pub fn display_message(&self) -> Option<&str> {
        if !self.message.trim().is_empty() {
            return Some(self.message.as_str());
        }
        self.errors.first().map(|error| error.message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_new() {
        let error = ErrorResponse::new("Email already registered");
        assert_eq!(error.display_message(), Some("Email already registered"));
        assert!(!error.success);
        assert!(error.errors.is_empty());
    }

    #[test]
    fn test_error_response_falls_back_to_field_message() {
        let json = r#"{"success":false,"errors":[{"path":"email","msg":"Please provide a valid email"}]}"#;
        let error: ErrorResponse = serde_json::from_str(json).unwrap();

        assert_eq!(error.errors[0].field, "email");
        assert_eq!(error.display_message(), Some("Please provide a valid email"));
    }

    #[test]
    fn test_error_response_empty_body() {
        let error: ErrorResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(error.display_message(), None);
    }
}
