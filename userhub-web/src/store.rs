//! Durable persistence of the bearer token and cached identity.
//!
//! The record has exactly two entries, written and cleared together. A record
//! with only one half present is invalid and loads as absent.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_storage::{LocalStorage, Storage};
use shared::models::Identity;
use tracing::warn;

use crate::config::WebConfig;
use crate::errors::StoreError;

/// A persisted credential record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Opaque bearer token. Never decoded.
    pub token: String,
    /// Last known identity. A placeholder only; never trusted for privilege
    /// decisions.
    pub identity: Identity,
}

/// Key/value durability for the credential record.
pub trait CredentialStore {
    /// Persist a token together with the identity it was issued for.
    ///
    /// # Errors
    /// Returns [`StoreError`] if the backing storage refuses the write. No
    /// partial record is left behind.
    fn save(&self, token: &str, identity: &Identity) -> Result<(), StoreError>;

    /// Rewrite only the cached identity. Does nothing when no token is stored.
    ///
    /// # Errors
    /// Returns [`StoreError`] if the backing storage refuses the write.
    fn save_identity(&self, identity: &Identity) -> Result<(), StoreError>;

    /// Read the record, or `None` if it is absent or incomplete.
    fn load(&self) -> Option<Credentials>;

    /// Remove both entries.
    fn clear(&self);
}

impl<T: CredentialStore + ?Sized> CredentialStore for Rc<T> {
    fn save(&self, token: &str, identity: &Identity) -> Result<(), StoreError> {
        (**self).save(token, identity)
    }

    fn save_identity(&self, identity: &Identity) -> Result<(), StoreError> {
        (**self).save_identity(identity)
    }

    fn load(&self) -> Option<Credentials> {
        (**self).load()
    }

    fn clear(&self) {
        (**self).clear();
    }
}

/// Browser `localStorage` implementation.
#[derive(Debug, Clone)]
pub struct LocalCredentialStore {
    token_key: String,
    identity_key: String,
}

impl LocalCredentialStore {
    /// Create a store using the keys from the frontend configuration.
    pub fn new(config: &WebConfig) -> Self {
        Self {
            token_key: config.token_key.clone(),
            identity_key: config.identity_key.clone(),
        }
    }
}

impl CredentialStore for LocalCredentialStore {
    fn save(&self, token: &str, identity: &Identity) -> Result<(), StoreError> {
        let written = LocalStorage::set(&self.token_key, token)
            .map_err(|err| StoreError::write(&self.token_key, err))
            .and_then(|()| {
                LocalStorage::set(&self.identity_key, identity)
                    .map_err(|err| StoreError::write(&self.identity_key, err))
            });
        if written.is_err() {
            self.clear();
        }
        written
    }

    fn save_identity(&self, identity: &Identity) -> Result<(), StoreError> {
        if LocalStorage::get::<String>(&self.token_key).is_err() {
            return Ok(());
        }
        LocalStorage::set(&self.identity_key, identity)
            .map_err(|err| StoreError::write(&self.identity_key, err))
    }

    fn load(&self) -> Option<Credentials> {
        let token = LocalStorage::get::<String>(&self.token_key).ok();
        let identity = LocalStorage::get::<Identity>(&self.identity_key).ok();
        match (token, identity) {
            (Some(token), Some(identity)) => Some(Credentials { token, identity }),
            (None, None) => None,
            _ => {
                warn!("discarding incomplete credential record");
                self.clear();
                None
            }
        }
    }

    fn clear(&self) {
        LocalStorage::delete(&self.token_key);
        LocalStorage::delete(&self.identity_key);
    }
}

/// In-memory implementation used by tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: RefCell<Option<String>>,
    identity: RefCell<Option<Identity>>,
}

impl MemoryCredentialStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with a record, as if left by a previous visit.
    pub fn with_credentials(token: &str, identity: Identity) -> Self {
        Self {
            token: RefCell::new(Some(token.to_string())),
            identity: RefCell::new(Some(identity)),
        }
    }

    /// A store holding only a token, as left by an interrupted write.
    #[cfg(test)]
    pub fn with_token_only(token: &str) -> Self {
        Self {
            token: RefCell::new(Some(token.to_string())),
            identity: RefCell::new(None),
        }
    }

    /// Whether neither half of the record is present.
    pub fn is_empty(&self) -> bool {
        self.token.borrow().is_none() && self.identity.borrow().is_none()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn save(&self, token: &str, identity: &Identity) -> Result<(), StoreError> {
        *self.token.borrow_mut() = Some(token.to_string());
        *self.identity.borrow_mut() = Some(identity.clone());
        Ok(())
    }

    fn save_identity(&self, identity: &Identity) -> Result<(), StoreError> {
        if self.token.borrow().is_some() {
            *self.identity.borrow_mut() = Some(identity.clone());
        }
        Ok(())
    }

    fn load(&self) -> Option<Credentials> {
        let token = self.token.borrow().clone();
        let identity = self.identity.borrow().clone();
        match (token, identity) {
            (Some(token), Some(identity)) => Some(Credentials { token, identity }),
            (None, None) => None,
            _ => {
                warn!("discarding incomplete credential record");
                self.clear();
                None
            }
        }
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
        self.identity.borrow_mut().take();
    }
}
