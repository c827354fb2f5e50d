//! Boundary calls to the remote identity service.

use std::rc::Rc;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::models::{
    ApiEnvelope, AuthPayload, ChangePasswordRequest, ErrorResponse, Identity, LoginRequest,
    SignupConfirmation, SignupRequest, UpdateProfileRequest, UserPage, UserPayload, UserStatus,
};
use tracing::debug;

use crate::config::WebConfig;
use crate::errors::{AuthError, AuthResult};

/// Operations offered by the identity service.
///
/// Implementations hold no session state: the bearer token is passed to every
/// authenticated call. Futures are not `Send`; the browser runs them on its
/// single event loop.
#[async_trait(?Send)]
pub trait IdentityService {
    /// Exchange credentials for an identity and bearer token.
    ///
    /// # Errors
    /// [`AuthError::InvalidCredentials`] when the service rejects the pair,
    /// [`AuthError::Network`] when it cannot be reached.
    async fn login(&self, email: &str, password: &str) -> AuthResult<AuthPayload>;

    /// Register a new account. Does not sign in.
    ///
    /// # Errors
    /// [`AuthError::Validation`] (e.g. duplicate email) or [`AuthError::Network`].
    async fn signup(
        &self,
        full_name: &str,
        email: &str,
        password: &str,
    ) -> AuthResult<SignupConfirmation>;

    /// Resolve the identity that owns `token`.
    ///
    /// # Errors
    /// [`AuthError::InvalidToken`] when the token is expired or revoked,
    /// [`AuthError::Network`] when the service cannot be reached.
    async fn fetch_current_identity(&self, token: &str) -> AuthResult<Identity>;

    /// Revoke `token` on the service. Best-effort.
    ///
    /// # Errors
    /// Any failure; callers log and ignore it.
    async fn logout(&self, token: &str) -> AuthResult<()>;

    /// Update editable profile fields and return the refreshed identity.
    ///
    /// # Errors
    /// [`AuthError::Validation`] or [`AuthError::Unauthorized`].
    async fn update_profile(
        &self,
        token: &str,
        fields: &UpdateProfileRequest,
    ) -> AuthResult<Identity>;

    /// Replace the account password.
    ///
    /// # Errors
    /// [`AuthError::Validation`] or [`AuthError::Unauthorized`].
    async fn change_password(
        &self,
        token: &str,
        request: &ChangePasswordRequest,
    ) -> AuthResult<()>;
}

#[async_trait(?Send)]
impl<T: IdentityService + ?Sized> IdentityService for Rc<T> {
    async fn login(&self, email: &str, password: &str) -> AuthResult<AuthPayload> {
        (**self).login(email, password).await
    }

    async fn signup(
        &self,
        full_name: &str,
        email: &str,
        password: &str,
    ) -> AuthResult<SignupConfirmation> {
        (**self).signup(full_name, email, password).await
    }

    async fn fetch_current_identity(&self, token: &str) -> AuthResult<Identity> {
        (**self).fetch_current_identity(token).await
    }

    async fn logout(&self, token: &str) -> AuthResult<()> {
        (**self).logout(token).await
    }

    async fn update_profile(
        &self,
        token: &str,
        fields: &UpdateProfileRequest,
    ) -> AuthResult<Identity> {
        (**self).update_profile(token, fields).await
    }

    async fn change_password(
        &self,
        token: &str,
        request: &ChangePasswordRequest,
    ) -> AuthResult<()> {
        (**self).change_password(token, request).await
    }
}

/// Administrator operations on other accounts.
///
/// Kept apart from [`IdentityService`] because only the admin view uses
/// them, always through [`crate::session::SessionMachine::authorized`].
#[async_trait(?Send)]
pub trait UserAdministration {
    /// Fetch one page of the user listing. Pages are one-based.
    ///
    /// # Errors
    /// [`AuthError::Unauthorized`] for non-administrators or a revoked token,
    /// [`AuthError::Network`] when the service cannot be reached.
    async fn list_users(&self, token: &str, page: u32, limit: u32) -> AuthResult<UserPage>;

    /// Activate or deactivate the account `user_id`.
    ///
    /// # Errors
    /// [`AuthError::Validation`] when the service refuses the change,
    /// [`AuthError::Unauthorized`] for non-administrators.
    async fn set_user_status(
        &self,
        token: &str,
        user_id: &str,
        status: UserStatus,
    ) -> AuthResult<()>;
}

#[async_trait(?Send)]
impl<T: UserAdministration + ?Sized> UserAdministration for Rc<T> {
    async fn list_users(&self, token: &str, page: u32, limit: u32) -> AuthResult<UserPage> {
        (**self).list_users(token, page, limit).await
    }

    async fn set_user_status(
        &self,
        token: &str,
        user_id: &str,
        status: UserStatus,
    ) -> AuthResult<()> {
        (**self).set_user_status(token, user_id, status).await
    }
}

/// Identity service endpoints. Each one interprets `401` differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    Signup,
    Me,
    Logout,
    Profile,
    ChangePassword,
    Users,
    ActivateUser,
    DeactivateUser,
}

impl Endpoint {
    /// Path relative to the API base URL.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "auth/login",
            Self::Signup => "auth/signup",
            Self::Me => "auth/me",
            Self::Logout => "auth/logout",
            Self::Profile => "users/profile",
            Self::ChangePassword => "users/change-password",
            Self::Users => "users",
            Self::ActivateUser => "users/:id/activate",
            Self::DeactivateUser => "users/:id/deactivate",
        }
    }

    /// The endpoint that moves an account into `status`.
    pub const fn for_status(status: UserStatus) -> Self {
        match status {
            UserStatus::Active => Self::ActivateUser,
            UserStatus::Inactive => Self::DeactivateUser,
        }
    }
}

/// Map a non-success status and optional service message to an [`AuthError`].
pub fn classify_status(endpoint: Endpoint, status: StatusCode, message: Option<&str>) -> AuthError {
    let message = message.map(str::trim).filter(|text| !text.is_empty());
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN if endpoint == Endpoint::Login => {
            AuthError::InvalidCredentials(
                message.unwrap_or("Invalid email or password").to_string(),
            )
        }
        StatusCode::UNAUTHORIZED if endpoint == Endpoint::Me => AuthError::InvalidToken,
        StatusCode::UNAUTHORIZED => AuthError::Unauthorized,
        StatusCode::FORBIDDEN if endpoint == Endpoint::Me => AuthError::InvalidToken,
        StatusCode::FORBIDDEN => AuthError::Unauthorized,
        StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
            AuthError::Validation(message.unwrap_or("The request was rejected").to_string())
        }
        status => AuthError::Network(match message {
            Some(text) => format!("{status}: {text}"),
            None => status.to_string(),
        }),
    }
}

/// Lightweight API client for the identity service.
#[derive(Clone, Debug)]
pub struct UserHubClient {
    base_url: String,
    client: Client,
}

impl UserHubClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create a client pointed at the configured identity service.
    pub fn from_config(config: &WebConfig) -> Self {
        Self::new(&config.resolved_api_base_url())
    }

    fn api_url(&self, endpoint: Endpoint) -> String {
        format!("{}/{}", self.base_url, endpoint.path())
    }

    fn request(&self, method: reqwest::Method, endpoint: Endpoint) -> RequestBuilder {
        self.client.request(method, self.api_url(endpoint))
    }

    fn user_url(&self, endpoint: Endpoint, user_id: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.path().replace(":id", user_id))
    }

    async fn send<T: DeserializeOwned>(
        endpoint: Endpoint,
        request: RequestBuilder,
    ) -> AuthResult<ApiEnvelope<T>> {
        let response = request.send().await?;
        debug!(endpoint = endpoint.path(), status = %response.status(), "identity service responded");
        Self::decode(endpoint, response).await
    }

    async fn decode<T: DeserializeOwned>(
        endpoint: Endpoint,
        response: Response,
    ) -> AuthResult<ApiEnvelope<T>> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let error = serde_json::from_str::<ErrorResponse>(&body).unwrap_or_default();
            return Err(classify_status(endpoint, status, error.display_message()));
        }
        if body.trim().is_empty() {
            return Ok(ApiEnvelope {
                success: true,
                message: None,
                data: None,
            });
        }
        serde_json::from_str(&body).map_err(|err| AuthError::UnexpectedResponse(err.to_string()))
    }

    fn require<T>(endpoint: Endpoint, envelope: ApiEnvelope<T>) -> AuthResult<T> {
        envelope.data.ok_or_else(|| {
            AuthError::UnexpectedResponse(format!("{} returned no data", endpoint.path()))
        })
    }
}

#[async_trait(?Send)]
impl IdentityService for UserHubClient {
    async fn login(&self, email: &str, password: &str) -> AuthResult<AuthPayload> {
        let payload = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let request = self.request(reqwest::Method::POST, Endpoint::Login).json(&payload);
        let envelope = Self::send(Endpoint::Login, request).await?;
        Self::require(Endpoint::Login, envelope)
    }

    async fn signup(
        &self,
        full_name: &str,
        email: &str,
        password: &str,
    ) -> AuthResult<SignupConfirmation> {
        let payload = SignupRequest {
            full_name: full_name.trim().to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let request = self.request(reqwest::Method::POST, Endpoint::Signup).json(&payload);
        let envelope: ApiEnvelope<serde_json::Value> = Self::send(Endpoint::Signup, request).await?;
        Ok(SignupConfirmation {
            message: envelope
                .message
                .unwrap_or_else(|| "Account created. Please sign in.".to_string()),
        })
    }

    async fn fetch_current_identity(&self, token: &str) -> AuthResult<Identity> {
        let request = self
            .request(reqwest::Method::GET, Endpoint::Me)
            .bearer_auth(token);
        let envelope: ApiEnvelope<UserPayload> = Self::send(Endpoint::Me, request).await?;
        Self::require(Endpoint::Me, envelope).map(|payload| payload.user)
    }

    async fn logout(&self, token: &str) -> AuthResult<()> {
        let request = self
            .request(reqwest::Method::POST, Endpoint::Logout)
            .bearer_auth(token);
        let _: ApiEnvelope<serde_json::Value> = Self::send(Endpoint::Logout, request).await?;
        Ok(())
    }

    async fn update_profile(
        &self,
        token: &str,
        fields: &UpdateProfileRequest,
    ) -> AuthResult<Identity> {
        let request = self
            .request(reqwest::Method::PUT, Endpoint::Profile)
            .bearer_auth(token)
            .json(fields);
        let envelope: ApiEnvelope<UserPayload> = Self::send(Endpoint::Profile, request).await?;
        Self::require(Endpoint::Profile, envelope).map(|payload| payload.user)
    }

    async fn change_password(
        &self,
        token: &str,
        request: &ChangePasswordRequest,
    ) -> AuthResult<()> {
        let builder = self
            .request(reqwest::Method::PUT, Endpoint::ChangePassword)
            .bearer_auth(token)
            .json(request);
        let _: ApiEnvelope<serde_json::Value> =
            Self::send(Endpoint::ChangePassword, builder).await?;
        Ok(())
    }
}

#[async_trait(?Send)]
impl UserAdministration for UserHubClient {
    async fn list_users(&self, token: &str, page: u32, limit: u32) -> AuthResult<UserPage> {
        let request = self
            .request(reqwest::Method::GET, Endpoint::Users)
            .bearer_auth(token)
            .query(&[("page", page), ("limit", limit)]);
        let envelope: ApiEnvelope<UserPage> = Self::send(Endpoint::Users, request).await?;
        Self::require(Endpoint::Users, envelope)
    }

    async fn set_user_status(
        &self,
        token: &str,
        user_id: &str,
        status: UserStatus,
    ) -> AuthResult<()> {
        let endpoint = Endpoint::for_status(status);
        let request = self
            .client
            .patch(self.user_url(endpoint, user_id))
            .bearer_auth(token);
        let _: ApiEnvelope<serde_json::Value> = Self::send(endpoint, request).await?;
        Ok(())
    }
}
