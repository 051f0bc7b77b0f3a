//! # Auth State
//!
//! Holds the signed-in identity and mirrors it into the `user` snapshot.
//!
//! ## Session Lifecycle
//! ```text
//! with_persistence(slot)   loading = true,  user = None
//!        │
//!        ▼
//! restore()                loading = false, user = saved identity (if any)
//!        │
//!        ├── login / register ──► user = Some(..), snapshot saved
//!        └── logout ────────────► user = None,     snapshot removed
//! ```
//! Every transition notifies subscribers synchronously. Failed logins leave
//! the state untouched and notify no one.

use std::sync::{Mutex, MutexGuard, PoisonError};

use bouticlick_core::{CoreResult, MockDirectory, User};
use bouticlick_storage::SnapshotStore;
use serde::Serialize;
use tracing::{debug, info, warn};
use ts_rs::TS;

use super::observers::{Subscribers, SubscriptionId};

/// What auth subscribers receive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct AuthState {
    pub user: Option<User>,
    /// True until the saved session has been restored.
    pub loading: bool,
}

type UserPersistence = Box<dyn SnapshotStore<User>>;

/// Observable session store.
pub struct AuthStore {
    state: Mutex<AuthState>,
    directory: MockDirectory,
    persistence: Option<UserPersistence>,
    subscribers: Subscribers<AuthState>,
}

impl AuthStore {
    /// A signed-out store with nothing to restore.
    pub fn new() -> Self {
        AuthStore {
            state: Mutex::new(AuthState::default()),
            directory: MockDirectory::new(),
            persistence: None,
            subscribers: Subscribers::new(),
        }
    }

    /// A store backed by `slot`. Stays loading until [`AuthStore::restore`].
    pub fn with_persistence(slot: impl SnapshotStore<User> + 'static) -> Self {
        AuthStore {
            state: Mutex::new(AuthState {
                user: None,
                loading: true,
            }),
            directory: MockDirectory::new(),
            persistence: Some(Box::new(slot)),
            subscribers: Subscribers::new(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, AuthState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Loads the saved identity and ends the loading phase.
    ///
    /// A malformed snapshot is logged by the slot and treated as signed out.
    pub fn restore(&self) -> Option<User> {
        let user = self.persistence.as_ref().and_then(|slot| slot.load());

        match &user {
            Some(u) => info!(user_id = %u.id, "Restored saved session"),
            None => debug!("No saved session"),
        }

        self.transition(user.clone());
        user
    }

    // =========================================================================
    // Session Operations
    // =========================================================================

    /// Signs in against the mock directory.
    ///
    /// ## Returns
    /// * `Ok(User)` - the signed-in identity (also saved)
    /// * `Err(CoreError::InvalidCredentials)` - state unchanged
    pub fn login(&self, email: &str, password: &str) -> CoreResult<User> {
        let user = self.directory.login(email, password).map_err(|e| {
            debug!(email = %email.trim(), "Login rejected");
            e
        })?;

        info!(user_id = %user.id, role = ?user.role, "Signed in");
        self.persist(&user);
        self.transition(Some(user.clone()));
        Ok(user)
    }

    /// Creates a regular account and signs it in.
    pub fn register(&self, name: &str, email: &str, password: &str) -> CoreResult<User> {
        let user = self.directory.register(name, email, password)?;

        info!(user_id = %user.id, "Registered new account");
        self.persist(&user);
        self.transition(Some(user.clone()));
        Ok(user)
    }

    /// Signs out and removes the saved identity.
    pub fn logout(&self) {
        if let Some(slot) = &self.persistence {
            if let Err(e) = slot.clear() {
                warn!(error = %e, "Failed to remove saved session");
            }
        }

        info!("Signed out");
        self.transition(None);
    }

    fn persist(&self, user: &User) {
        if let Some(slot) = &self.persistence {
            if let Err(e) = slot.save(user) {
                warn!(error = %e, "Failed to save session; keeping in-memory state");
            }
        }
    }

    fn transition(&self, user: Option<User>) {
        let state = {
            let mut state = self.lock();
            state.user = user;
            state.loading = false;
            state.clone()
        };
        self.subscribers.notify(&state);
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub fn state(&self) -> AuthState {
        self.lock().clone()
    }

    pub fn current_user(&self) -> Option<User> {
        self.lock().user.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().loading
    }

    /// Whether the signed-in user has the admin role.
    pub fn is_admin(&self) -> bool {
        self.lock().user.as_ref().is_some_and(User::is_admin)
    }

    // =========================================================================
    // Observation
    // =========================================================================

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&AuthState) + Send + Sync + 'static,
    {
        self.subscribers.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }
}

impl Default for AuthStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AuthStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthStore")
            .field("state", &*self.lock())
            .field("persistent", &self.persistence.is_some())
            .finish()
    }
}
