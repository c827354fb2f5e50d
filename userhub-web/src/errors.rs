//! Error taxonomy for the session core.
//!
//! Errors fall into three groups: transient (`Network`, `UnexpectedResponse`),
//! user-correctable (`InvalidCredentials`, `Validation`) and session-fatal
//! (`InvalidToken`, `Unauthorized`). Session-fatal errors always end the
//! local session.

use thiserror::Error;

/// Result alias for session and identity service operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// Failures surfaced by the identity service client and the session machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The request never produced a usable response.
    #[error("Unable to reach the server: {0}")]
    Network(String),

    /// The service rejected the email/password pair.
    #[error("{0}")]
    InvalidCredentials(String),

    /// The service rejected the submitted fields.
    #[error("{0}")]
    Validation(String),

    /// The stored bearer token is expired or revoked.
    #[error("Your session has expired. Please sign in again.")]
    InvalidToken,

    /// The service refused an authenticated request.
    #[error("You are not authorized to perform this action.")]
    Unauthorized,

    /// The service answered with a body this client cannot interpret.
    #[error("Unexpected response from server: {0}")]
    UnexpectedResponse(String),

    /// Browser storage refused a write.
    #[error(transparent)]
    Storage(#[from] StoreError),

    /// `bootstrap` runs once per process.
    #[error("Session bootstrap has already run")]
    AlreadyBootstrapped,

    /// A later login or logout replaced the session while this request was
    /// in flight; its result was discarded.
    #[error("The session changed before the request completed")]
    Superseded,
}

impl AuthError {
    /// Whether this error invalidates the local session.
    #[must_use]
    pub fn is_session_fatal(&self) -> bool {
        matches!(self, Self::InvalidToken | Self::Unauthorized)
    }

    /// Whether resubmitting the same request may succeed.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Network(_) | Self::UnexpectedResponse(_))
    }

    /// Message suitable for rendering inline next to a form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) | Self::UnexpectedResponse(_) => {
                "Unable to connect to server. Please try again.".to_string()
            }
            Self::Storage(_) => {
                "Your browser blocked local storage, so the session cannot be kept.".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::UnexpectedResponse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Failures writing the persisted credential record.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A key could not be written.
    #[error("failed to persist `{key}`: {message}")]
    Write {
        /// Storage key that failed.
        key: String,
        /// Underlying storage error text.
        message: String,
    },
}

impl StoreError {
    /// Build a write error from any displayable storage failure.
    pub fn write(key: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Write {
            key: key.into(),
            message: err.to_string(),
        }
    }
}
