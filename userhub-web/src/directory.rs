//! Administrator view of other accounts.
//!
//! Listing and status changes go through [`SessionMachine::authorized`], so
//! the page never handles the bearer token and a revoked administrator is
//! signed out like anywhere else.

use shared::models::{Identity, UserPage, UserStatus};
use tracing::info;

use crate::api::{IdentityService, UserAdministration};
use crate::errors::{AuthError, AuthResult};
use crate::session::SessionMachine;
use crate::store::CredentialStore;

/// Accounts shown per directory page.
pub const PAGE_SIZE: u32 = 10;

/// A pending activate or deactivate, awaiting confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    pub user: Identity,
    pub target: UserStatus,
}

impl StatusChange {
    /// The change that flips `user` to the opposite status.
    pub fn toggle(user: Identity) -> Self {
        let target = match user.status {
            UserStatus::Active => UserStatus::Inactive,
            UserStatus::Inactive => UserStatus::Active,
        };
        Self { user, target }
    }

    fn verb(&self) -> &'static str {
        match self.target {
            UserStatus::Active => "activate",
            UserStatus::Inactive => "deactivate",
        }
    }

    /// Button and dialog confirm label.
    pub fn label(&self) -> &'static str {
        match self.target {
            UserStatus::Active => "Activate",
            UserStatus::Inactive => "Deactivate",
        }
    }

    pub fn title(&self) -> String {
        format!("{} User", self.label())
    }

    pub fn message(&self) -> String {
        let consequence = match self.target {
            UserStatus::Active => "They will be able to log in again.",
            UserStatus::Inactive => "They will no longer be able to log in.",
        };
        format!(
            "Are you sure you want to {} {}'s account? {consequence}",
            self.verb(),
            self.user.full_name
        )
    }

    /// Deactivation locks someone out and is styled as destructive.
    pub fn is_destructive(&self) -> bool {
        self.target == UserStatus::Inactive
    }

    pub fn success_message(&self) -> String {
        format!("{} has been {}d", self.user.full_name, self.verb())
    }

    /// The service's own wording when it gave one, otherwise a generic line.
    pub fn failure_message(&self, err: &AuthError) -> String {
        match err {
            AuthError::Validation(message) => message.clone(),
            _ => format!("Failed to {} user", self.verb()),
        }
    }
}

/// Load one directory page with the session's token. `page` is one-based;
/// zero is treated as the first page.
///
/// # Errors
/// Whatever [`SessionMachine::authorized`] reports for the listing call.
pub async fn fetch_page<S, C, A>(
    session: &SessionMachine<S, C>,
    admin: &A,
    page: u32,
) -> AuthResult<UserPage>
where
    S: CredentialStore,
    C: IdentityService,
    A: UserAdministration + ?Sized,
{
    let page = page.max(1);
    session
        .authorized(|token| async move { admin.list_users(&token, page, PAGE_SIZE).await })
        .await
}

/// Apply a confirmed status change.
///
/// # Errors
/// Whatever [`SessionMachine::authorized`] reports for the status call.
pub async fn apply<S, C, A>(
    session: &SessionMachine<S, C>,
    admin: &A,
    change: &StatusChange,
) -> AuthResult<()>
where
    S: CredentialStore,
    C: IdentityService,
    A: UserAdministration + ?Sized,
{
    let user_id = change.user.id.as_str();
    let target = change.target;
    session
        .authorized(|token| async move { admin.set_user_status(&token, user_id, target).await })
        .await?;
    info!(user = user_id, status = target.as_str(), "account status changed");
    Ok(())
}
