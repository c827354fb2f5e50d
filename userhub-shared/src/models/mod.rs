//! Data shapes served by the identity service.

pub mod auth;
pub mod directory;
pub mod errors;
pub mod identity;
pub mod timestamp;

pub use auth::{
    ApiEnvelope, AuthPayload, ChangePasswordRequest, LoginRequest, SignupConfirmation,
    SignupRequest, UpdateProfileRequest, UserPayload,
};
pub use directory::{PageInfo, UserPage};
pub use errors::ErrorResponse;
pub use identity::{Identity, UserRole, UserStatus};
pub use timestamp::Timestamp;
