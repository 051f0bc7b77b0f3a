//! # Auth Commands
//!
//! Sign in, sign up, sign out, and "who am I".
//!
//! Accounts come from the built-in mock directory:
//! `admin@example.com` / `admin` and `user@example.com` / `user`.
//! Registration accepts any valid name, email and password and signs the
//! new account in as a regular user.

use serde::Serialize;
use tracing::debug;
use ts_rs::TS;

use bouticlick_core::User;

use crate::error::ApiError;
use crate::state::AuthStore;

/// Current session as seen by the navbar.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user: Option<User>,
    /// Shows the Admin link.
    pub is_admin: bool,
}

impl SessionResponse {
    fn from_store(auth: &AuthStore) -> Self {
        SessionResponse {
            user: auth.current_user(),
            is_admin: auth.is_admin(),
        }
    }
}

/// Signs in with email and password.
///
/// ## Returns
/// * `Ok(SessionResponse)` - signed in; the session is saved
/// * `Err(ApiError)` - `UNAUTHORIZED` for an unknown pair, previous session
///   kept
pub fn login(auth: &AuthStore, email: &str, password: &str) -> Result<SessionResponse, ApiError> {
    debug!(email = %email.trim(), "login command");

    auth.login(email, password)?;
    Ok(SessionResponse::from_store(auth))
}

/// Creates an account and signs it in.
///
/// ## Returns
/// * `Ok(SessionResponse)` - the new regular user
/// * `Err(ApiError)` - `VALIDATION_ERROR` naming the bad field
pub fn register(
    auth: &AuthStore,
    name: &str,
    email: &str,
    password: &str,
) -> Result<SessionResponse, ApiError> {
    debug!(email = %email.trim(), "register command");

    auth.register(name, email, password)?;
    Ok(SessionResponse::from_store(auth))
}

/// Signs out. Always succeeds.
pub fn logout(auth: &AuthStore) -> SessionResponse {
    debug!("logout command");

    auth.logout();
    SessionResponse::from_store(auth)
}

pub fn whoami(auth: &AuthStore) -> SessionResponse {
    debug!("whoami command");
    SessionResponse::from_store(auth)
}
