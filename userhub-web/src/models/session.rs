use shared::models::{Identity, UserRole};

/// The in-memory session.
///
/// `identity` is only ever set from a server verification or a freshly
/// issued login, so "authenticated" is simply "identity present".
/// `bootstrapping` starts `true` and is cleared exactly once, when startup
/// verification resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    identity: Option<Identity>,
    bootstrapping: bool,
    placeholder: Option<Identity>,
}

impl Default for Session {
    fn default() -> Self {
        Self::bootstrapping()
    }
}

impl Session {
    /// State at process start: no identity, decisions deferred.
    #[must_use]
    pub const fn bootstrapping() -> Self {
        Self {
            identity: None,
            bootstrapping: true,
            placeholder: None,
        }
    }

    /// Resolved and signed out.
    #[must_use]
    pub const fn unauthenticated() -> Self {
        Self {
            identity: None,
            bootstrapping: false,
            placeholder: None,
        }
    }

    /// Resolved and signed in as `identity`.
    #[must_use]
    pub fn authenticated(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
            bootstrapping: false,
            placeholder: None,
        }
    }

    /// The verified identity, if any.
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(UserRole::Admin)
    }

    pub fn is_bootstrapping(&self) -> bool {
        self.bootstrapping
    }

    pub fn role(&self) -> Option<UserRole> {
        self.identity.as_ref().map(|identity| identity.role)
    }

    /// Cached identity from a previous visit, available only while startup
    /// verification is pending. Display only.
    pub fn placeholder(&self) -> Option<&Identity> {
        self.placeholder.as_ref()
    }

    /// Same bootstrap phase, different identity.
    pub(crate) fn with_identity(&self, identity: Option<Identity>) -> Self {
        Self {
            identity,
            bootstrapping: self.bootstrapping,
            placeholder: if self.bootstrapping {
                self.placeholder.clone()
            } else {
                None
            },
        }
    }

    /// Still bootstrapping, showing a cached identity to the loading view.
    pub(crate) fn with_placeholder(&self, placeholder: Identity) -> Self {
        Self {
            identity: self.identity.clone(),
            bootstrapping: self.bootstrapping,
            placeholder: self.bootstrapping.then_some(placeholder),
        }
    }

    /// Startup verification finished; the placeholder is dropped.
    pub(crate) fn resolved(&self) -> Self {
        Self {
            identity: self.identity.clone(),
            bootstrapping: false,
            placeholder: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_implementations::identity;

    #[test]
    fn test_default_session_is_bootstrapping() {
        let session = Session::default();
        assert!(session.is_bootstrapping());
        assert!(!session.is_authenticated());
        assert!(!session.is_admin());
        assert_eq!(session.identity(), None);
    }

    #[test]
    fn test_unauthenticated_has_no_identity() {
        let session = Session::unauthenticated();
        assert!(!session.is_bootstrapping());
        assert!(!session.is_authenticated());
        assert_eq!(session.role(), None);
    }

    #[test]
    fn test_authenticated_projections() {
        let admin = Session::authenticated(identity(UserRole::Admin));
        assert!(admin.is_authenticated());
        assert!(admin.is_admin());

        let user = Session::authenticated(identity(UserRole::User));
        assert!(user.is_authenticated());
        assert!(!user.is_admin());
        assert_eq!(user.role(), Some(UserRole::User));
    }

    #[test]
    fn test_placeholder_never_authenticates() {
        let session = Session::bootstrapping().with_placeholder(identity(UserRole::Admin));

        assert!(session.placeholder().is_some());
        assert!(!session.is_authenticated());
        assert!(!session.is_admin());
    }

    #[test]
    fn test_placeholder_ignored_after_bootstrap() {
        let session = Session::unauthenticated().with_placeholder(identity(UserRole::User));
        assert_eq!(session.placeholder(), None);
    }

    #[test]
    fn test_resolved_clears_bootstrap_and_placeholder() {
        let session = Session::bootstrapping()
            .with_placeholder(identity(UserRole::User))
            .with_identity(Some(identity(UserRole::User)))
            .resolved();

        assert!(!session.is_bootstrapping());
        assert_eq!(session.placeholder(), None);
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_with_identity_keeps_bootstrap_phase() {
        let pending = Session::bootstrapping().with_identity(Some(identity(UserRole::User)));
        assert!(pending.is_bootstrapping());

        let signed_out = Session::authenticated(identity(UserRole::User)).with_identity(None);
        assert!(!signed_out.is_bootstrapping());
        assert!(!signed_out.is_authenticated());
    }
}
