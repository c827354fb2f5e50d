//! Validation logic for the account forms.
//!
//! Signup, profile, and password forms check their fields here before
//! calling the session machine. The identity service remains the authority;
//! these checks only save a round trip.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("valid email pattern"));

/// Characters accepted as the "special character" in a password.
pub const PASSWORD_SPECIALS: &str = "@$!%*?&";

/// Validation errors that can occur during form validation.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Error)]
pub enum ValidationError {
    /// Field is required but empty
    #[error("This field is required")]
    Required,
    /// Full name is shorter than two characters
    #[error("Full name must be at least 2 characters")]
    NameTooShort,
    /// Email address does not look like `local@domain.tld`
    #[error("Please enter a valid email")]
    InvalidEmail,
    /// Password fails one of the strength requirements
    #[error("Password does not meet requirements")]
    WeakPassword,
    /// Password confirmation doesn't match password
    #[error("Passwords do not match")]
    PasswordsDoNotMatch,
}

/// One password strength rule, as listed under the password field.
#[derive(Debug, Clone, Copy)]
pub struct PasswordRequirement {
    pub label: &'static str,
    test: fn(&str) -> bool,
}

impl PasswordRequirement {
    /// Whether `password` satisfies this rule.
    pub fn is_met(&self, password: &str) -> bool {
        (self.test)(password)
    }
}

/// Strength rules every new password must meet.
pub const PASSWORD_REQUIREMENTS: [PasswordRequirement; 5] = [
    PasswordRequirement {
        label: "At least 8 characters",
        test: |p| p.chars().count() >= 8,
    },
    PasswordRequirement {
        label: "One uppercase letter",
        test: |p| p.chars().any(|c| c.is_ascii_uppercase()),
    },
    PasswordRequirement {
        label: "One lowercase letter",
        test: |p| p.chars().any(|c| c.is_ascii_lowercase()),
    },
    PasswordRequirement {
        label: "One number",
        test: |p| p.chars().any(|c| c.is_ascii_digit()),
    },
    PasswordRequirement {
        label: "One special character",
        test: |p| p.chars().any(|c| PASSWORD_SPECIALS.contains(c)),
    },
];

/// Validates a full name: required, at least two characters once trimmed.
pub fn validate_full_name(full_name: &str) -> Result<(), ValidationError> {
    let trimmed = full_name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required);
    }

    if trimmed.chars().count() < 2 {
        return Err(ValidationError::NameTooShort);
    }

    Ok(())
}

/// Validates an email address.
///
/// # Validation rules
/// - Email must not be empty
/// - Email must look like `local@domain.tld` with no whitespace
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required);
    }

    if !EMAIL_PATTERN.is_match(trimmed) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

/// Validates a new password against [`PASSWORD_REQUIREMENTS`].
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::Required);
    }

    if !PASSWORD_REQUIREMENTS.iter().all(|rule| rule.is_met(password)) {
        return Err(ValidationError::WeakPassword);
    }

    Ok(())
}

/// Validates that the password confirmation matches the password.
pub fn validate_confirm_password(
    confirm_password: &str,
    password: &str,
) -> Result<(), ValidationError> {
    if confirm_password.is_empty() {
        return Err(ValidationError::Required);
    }

    if confirm_password != password {
        return Err(ValidationError::PasswordsDoNotMatch);
    }

    Ok(())
}

/// Sign-in only checks presence; strength rules apply to new passwords.
pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationError> {
    validate_email(email)?;
    if password.is_empty() {
        return Err(ValidationError::Required);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_full_name() {
        assert!(validate_full_name("Ada Lovelace").is_ok());
        assert!(validate_full_name("Al").is_ok());
        assert_eq!(validate_full_name(""), Err(ValidationError::Required));
        assert_eq!(validate_full_name("   "), Err(ValidationError::Required));
        assert_eq!(validate_full_name(" A "), Err(ValidationError::NameTooShort));
    }

    #[test]
    fn test_email_pattern_compiles() {
        assert!(EMAIL_PATTERN.is_match("a@b.co"));
        assert!(!EMAIL_PATTERN.is_match("a b@c.d"));
    }

    #[test]
    fn test_validate_email_valid() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("test.user@domain.org").is_ok());
        assert!(validate_email("user.name+tag@example.com").is_ok());
        assert!(validate_email("  padded@example.com  ").is_ok());
    }

    #[test]
    fn test_validate_email_invalid() {
        assert_eq!(validate_email(""), Err(ValidationError::Required));
        assert_eq!(validate_email("   "), Err(ValidationError::Required));
        assert_eq!(validate_email("userexample.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("user@localhost"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("user @example.com"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_validate_password_valid() {
        assert!(validate_password("MySecureP@ssw0rd").is_ok());
        assert!(validate_password("Abcdef1!").is_ok());
    }

    #[test]
    fn test_validate_password_invalid() {
        assert_eq!(validate_password(""), Err(ValidationError::Required));
        assert_eq!(validate_password("Ab1!"), Err(ValidationError::WeakPassword));
        assert_eq!(validate_password("abcdefg1!"), Err(ValidationError::WeakPassword));
        assert_eq!(validate_password("ABCDEFG1!"), Err(ValidationError::WeakPassword));
        assert_eq!(validate_password("Abcdefgh!"), Err(ValidationError::WeakPassword));
        assert_eq!(validate_password("Abcdefgh1"), Err(ValidationError::WeakPassword));
        assert_eq!(validate_password("Abcdefg1#"), Err(ValidationError::WeakPassword));
    }

    #[test]
    fn test_password_requirements_report_individually() {
        let met: Vec<&str> = PASSWORD_REQUIREMENTS
            .iter()
            .filter(|rule| rule.is_met("abc1"))
            .map(|rule| rule.label)
            .collect();
        assert_eq!(met, vec!["One lowercase letter", "One number"]);
    }

    #[test]
    fn test_validate_confirm_password() {
        assert!(validate_confirm_password("Abcdef1!", "Abcdef1!").is_ok());
        assert_eq!(
            validate_confirm_password("", "Abcdef1!"),
            Err(ValidationError::Required)
        );
        assert_eq!(
            validate_confirm_password("Abcdef1?", "Abcdef1!"),
            Err(ValidationError::PasswordsDoNotMatch)
        );
    }

    #[test]
    fn test_validate_login_only_checks_presence() {
        assert!(validate_login("a@b.com", "wrong").is_ok());
        assert_eq!(validate_login("a@b.com", ""), Err(ValidationError::Required));
        assert_eq!(validate_login("nope", "pw"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(ValidationError::InvalidEmail.to_string(), "Please enter a valid email");
        assert_eq!(
            ValidationError::PasswordsDoNotMatch.to_string(),
            "Passwords do not match"
        );
    }
}
