//! The session state machine.
//!
//! `SessionMachine` is the only writer of both the in-memory [`Session`] and
//! the [`CredentialStore`]. Views read snapshots and call its operations;
//! they never touch the store or the identity service directly.
//!
//! Every operation that suspends on the network captures the session
//! generation first and commits only if no login, logout, or session-fatal
//! teardown happened while it was suspended. Stale results are dropped and
//! reported as [`AuthError::Superseded`].

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use shared::models::{ChangePasswordRequest, Identity, SignupConfirmation, UpdateProfileRequest};
use tracing::{debug, info, warn};

use crate::api::{IdentityService, UserHubClient};
use crate::config::WebConfig;
use crate::errors::{AuthError, AuthResult};
use crate::models::session::Session;
use crate::store::{CredentialStore, LocalCredentialStore};

type Observer = Rc<dyn Fn(&Session)>;

/// Owns the session and reconciles persisted credentials with the service.
pub struct SessionMachine<S, C> {
    store: S,
    client: C,
    state: RefCell<Session>,
    generation: Cell<u64>,
    bootstrap_started: Cell<bool>,
    observers: RefCell<Vec<Observer>>,
}

impl<S, C> fmt::Debug for SessionMachine<S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionMachine")
            .field("session", &*self.state.borrow())
            .field("generation", &self.generation.get())
            .field("bootstrap_started", &self.bootstrap_started.get())
            .finish_non_exhaustive()
    }
}

impl<S: CredentialStore, C: IdentityService> SessionMachine<S, C> {
    /// A machine in the bootstrapping state. Call [`Self::bootstrap`] once.
    pub fn new(store: S, client: C) -> Self {
        Self {
            store,
            client,
            state: RefCell::new(Session::bootstrapping()),
            generation: Cell::new(0),
            bootstrap_started: Cell::new(false),
            observers: RefCell::new(Vec::new()),
        }
    }

    /// Current session snapshot.
    pub fn session(&self) -> Session {
        self.state.borrow().clone()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.state.borrow().identity().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    pub fn is_admin(&self) -> bool {
        self.state.borrow().is_admin()
    }

    /// Whether privilege decisions are still deferred.
    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_bootstrapping()
    }

    /// The managed bearer token, for views that call the service themselves.
    /// They must not persist or interpret it.
    pub fn bearer_token(&self) -> Option<String> {
        if !self.is_authenticated() {
            return None;
        }
        self.store.load().map(|credentials| credentials.token)
    }

    /// Register a callback run with a fresh snapshot after every committed
    /// transition. Observers must not call `subscribe` themselves.
    pub fn subscribe(&self, observer: impl Fn(&Session) + 'static) {
        self.observers.borrow_mut().push(Rc::new(observer));
    }

    /// Verify persisted credentials once at startup.
    ///
    /// Verification failures of any kind clear the store and leave the
    /// session signed out; they are never returned.
    ///
    /// # Errors
    /// [`AuthError::AlreadyBootstrapped`] on every call after the first.
    pub async fn bootstrap(&self) -> AuthResult<()> {
        if self.bootstrap_started.replace(true) {
            return Err(AuthError::AlreadyBootstrapped);
        }

        let Some(credentials) = self.store.load() else {
            debug!("no persisted credentials");
            self.publish(self.session().resolved());
            return Ok(());
        };

        self.publish(self.session().with_placeholder(credentials.identity));
        let generation = self.generation.get();
        let verified = self.client.fetch_current_identity(&credentials.token).await;

        if self.generation.get() != generation {
            debug!("session changed during bootstrap; keeping the newer state");
            self.publish(self.session().resolved());
            return Ok(());
        }

        match verified {
            Ok(identity) => {
                info!(user_id = %identity.id, role = %identity.role, "restored session");
                if let Err(err) = self.store.save_identity(&identity) {
                    warn!(error = %err, "failed to refresh cached identity");
                }
                self.publish(self.session().with_identity(Some(identity)).resolved());
            }
            Err(err) => {
                warn!(error = %err, "persisted credentials rejected; clearing");
                self.store.clear();
                self.publish(Session::unauthenticated());
            }
        }
        Ok(())
    }

    /// Sign in and persist the issued credentials.
    ///
    /// # Errors
    /// Service errors are returned unchanged and leave the session untouched.
    /// [`AuthError::Storage`] if the token cannot be persisted, and
    /// [`AuthError::Superseded`] if a logout landed first.
    pub async fn login(&self, email: &str, password: &str) -> AuthResult<Identity> {
        let generation = self.generation.get();
        let payload = self.client.login(email, password).await?;

        if self.generation.get() != generation {
            warn!("discarding login that completed after a newer session change");
            return Err(AuthError::Superseded);
        }

        self.store.save(&payload.token, &payload.user)?;
        info!(user_id = %payload.user.id, role = %payload.user.role, "logged in");
        self.advance(self.session().with_identity(Some(payload.user.clone())));
        Ok(payload.user)
    }

    /// Register a new account. Never changes the session.
    ///
    /// # Errors
    /// Service errors are returned unchanged.
    pub async fn signup(
        &self,
        full_name: &str,
        email: &str,
        password: &str,
    ) -> AuthResult<SignupConfirmation> {
        let confirmation = self.client.signup(full_name, email, password).await?;
        info!("account registered");
        Ok(confirmation)
    }

    /// End the session. Local teardown always happens; the remote call is
    /// best-effort and its failure is only logged.
    pub async fn logout(&self) {
        let token = self.store.load().map(|credentials| credentials.token);
        self.store.clear();
        self.advance(self.session().with_identity(None));
        info!("logged out");

        if let Some(token) = token {
            if let Err(err) = self.client.logout(&token).await {
                warn!(error = %err, "remote logout failed; local session already cleared");
            }
        }
    }

    /// Replace the identity wholesale, e.g. with the service's response to a
    /// profile update. The token is unchanged. Ignored when signed out.
    pub fn update_identity(&self, identity: Identity) {
        if !self.is_authenticated() {
            debug!("ignoring identity update without a session");
            return;
        }
        if let Err(err) = self.store.save_identity(&identity) {
            warn!(error = %err, "failed to refresh cached identity");
        }
        self.publish(self.session().with_identity(Some(identity)));
    }

    /// Submit profile changes and adopt the refreshed identity.
    ///
    /// # Errors
    /// [`AuthError::Validation`] for rejected fields. Session-fatal errors
    /// also end the session before being returned.
    pub async fn update_profile(&self, fields: &UpdateProfileRequest) -> AuthResult<Identity> {
        let identity = self
            .authorized(|token| async move { self.client.update_profile(&token, fields).await })
            .await?;
        self.update_identity(identity.clone());
        Ok(identity)
    }

    /// Change the account password.
    ///
    /// # Errors
    /// [`AuthError::Validation`] for a wrong current password or a weak new
    /// one. Session-fatal errors also end the session before being returned.
    pub async fn change_password(&self, current: &str, next: &str) -> AuthResult<()> {
        let request = ChangePasswordRequest {
            current_password: current.to_string(),
            new_password: next.to_string(),
        };
        self.authorized(|token| async move { self.client.change_password(&token, &request).await })
            .await
    }

    /// Run a service call with the managed bearer token.
    ///
    /// Views that talk to the service themselves (the user directory) go
    /// through here so the token never leaves the machine's control flow:
    /// the result is dropped if the session changed while `call` was
    /// suspended, and session-fatal errors end the session.
    ///
    /// # Errors
    /// [`AuthError::Unauthorized`] when signed out, [`AuthError::Superseded`]
    /// for stale results, otherwise whatever `call` returns.
    pub async fn authorized<T, F, Fut>(&self, call: F) -> AuthResult<T>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = AuthResult<T>>,
    {
        let token = self.require_token()?;
        let generation = self.generation.get();
        let result = call(token).await;

        if self.generation.get() != generation {
            return Err(AuthError::Superseded);
        }
        result.map_err(|err| self.escalate(err))
    }

    fn require_token(&self) -> AuthResult<String> {
        match self.bearer_token() {
            Some(token) => Ok(token),
            None => Err(self.escalate(AuthError::Unauthorized)),
        }
    }

    /// Tear the session down for session-fatal errors, then hand the error
    /// back for the caller to report.
    fn escalate(&self, err: AuthError) -> AuthError {
        if err.is_session_fatal() && self.is_authenticated() {
            warn!(error = %err, "session rejected by server; signing out");
            self.store.clear();
            self.advance(self.session().with_identity(None));
        }
        err
    }

    /// Commit a transition that starts a new session epoch.
    fn advance(&self, next: Session) {
        self.generation.set(self.generation.get() + 1);
        self.publish(next);
    }

    fn publish(&self, next: Session) {
        *self.state.borrow_mut() = next;
        let snapshot = self.session();
        let observers: Vec<Observer> = self.observers.borrow().clone();
        for observer in observers {
            observer(&snapshot);
        }
    }
}

/// The machine used in the browser.
pub type WebSession = SessionMachine<LocalCredentialStore, UserHubClient>;

impl WebSession {
    /// Build the browser session machine from configuration.
    pub fn from_config(config: &WebConfig) -> Self {
        Self::new(
            LocalCredentialStore::new(config),
            UserHubClient::from_config(config),
        )
    }
}

/// Shared handle to the browser session machine, provided through Yew
/// context. Equality is identity of the underlying machine.
#[derive(Clone, Debug)]
pub struct SessionHandle(pub Rc<WebSession>);

impl SessionHandle {
    pub fn new(machine: WebSession) -> Self {
        Self(Rc::new(machine))
    }
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::ops::Deref for SessionHandle {
    type Target = WebSession;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
